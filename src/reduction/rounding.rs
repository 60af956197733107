//! Rounded integer division for channel averages
//!
//! Averages are rounded half-to-even. The rule is applied exactly on the
//! integer quotient and remainder, which gives the same result as rounding
//! the true quotient: a tie only occurs when twice the remainder equals the
//! divisor.

use num_traits::{PrimInt, Unsigned};

/// Divide `sum` by `count`, rounding ties to the even quotient
///
/// Returns `None` when `count` is zero.
pub fn div_round_half_even<T>(sum: T, count: T) -> Option<T>
where
    T: PrimInt + Unsigned,
{
    if count.is_zero() {
        return None;
    }

    let quotient = sum / count;
    let remainder = sum % count;
    // remainder < count, so comparing against count - remainder avoids doubling
    let upper = count - remainder;

    let round_up = match remainder.cmp(&upper) {
        std::cmp::Ordering::Less => false,
        std::cmp::Ordering::Greater => true,
        std::cmp::Ordering::Equal => quotient % (T::one() + T::one()) == T::one(),
    };

    Some(if round_up {
        quotient + T::one()
    } else {
        quotient
    })
}

/// Average of a channel sum over `count` pixels, as an 8-bit value
///
/// The result saturates at 255, which a sum of 8-bit samples never exceeds.
pub fn channel_average(sum: u64, count: u64) -> Option<u8> {
    div_round_half_even(sum, count).map(|avg| u8::try_from(avg).unwrap_or(u8::MAX))
}

//! Tests for half-to-even rounded division

#[cfg(test)]
mod tests {
    use blockreduce::reduction::rounding::{channel_average, div_round_half_even};

    // Tests exact quotients are returned unchanged
    // Verified by always rounding up
    #[test]
    fn test_exact_division() {
        assert_eq!(div_round_half_even(12u64, 4), Some(3));
        assert_eq!(div_round_half_even(0u64, 7), Some(0));
    }

    // Tests non-tie remainders round to nearest
    // Verified by truncating instead of rounding
    #[test]
    fn test_rounds_to_nearest() {
        assert_eq!(div_round_half_even(10u64, 3), Some(3));
        assert_eq!(div_round_half_even(11u64, 3), Some(4));
        assert_eq!(div_round_half_even(2u32, 3), Some(1));
    }

    // Tests ties go to the even quotient
    // Verified by rounding ties away from zero
    #[test]
    fn test_ties_to_even() {
        assert_eq!(div_round_half_even(1u64, 2), Some(0));
        assert_eq!(div_round_half_even(3u64, 2), Some(2));
        assert_eq!(div_round_half_even(5u64, 2), Some(2));
        assert_eq!(div_round_half_even(7u64, 2), Some(4));
        assert_eq!(div_round_half_even(9u64, 6), Some(2));
        assert_eq!(div_round_half_even(15u64, 6), Some(2));
    }

    // Tests zero divisors are reported instead of panicking
    // Verified by removing the zero guard
    #[test]
    fn test_zero_count() {
        assert_eq!(div_round_half_even(5u64, 0), None);
        assert_eq!(channel_average(5, 0), None);
    }

    // Tests channel averages match rounding the true mean
    // Verified by using integer truncation
    #[test]
    fn test_channel_average_matches_float_rounding() {
        for count in 1..=12u64 {
            for sum in 0..=(255 * count) {
                let expected = (sum as f64 / count as f64).round_ties_even() as u8;
                assert_eq!(channel_average(sum, count), Some(expected));
            }
        }
    }
}

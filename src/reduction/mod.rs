//! Collapsing grid blocks into averaged pixels

/// Block tiling and channel averaging
pub mod reducer;
/// Half-to-even rounded division for channel means
pub mod rounding;

pub use reducer::{reduce, reduce_partition};

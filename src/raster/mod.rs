//! Bitmaps consumed and produced by the reducer

/// Output bitmap with one averaged pixel per block
pub mod reduced;
/// Validated source bitmap
pub mod source;

pub use reduced::ReducedImage;
pub use source::SourceImage;

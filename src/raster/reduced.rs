//! Output bitmap with one pixel per grid block

use crate::partition::engine::CompletedPartition;
use image::RgbImage;

/// Reduced bitmap produced once per completed partition
///
/// Dimensions equal the number of column and row blocks. The partition that
/// produced it is kept so callers can report or reuse the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReducedImage {
    pixels: RgbImage,
    partition: CompletedPartition,
}

impl ReducedImage {
    pub(crate) const fn new(pixels: RgbImage, partition: CompletedPartition) -> Self {
        Self { pixels, partition }
    }

    /// Number of column blocks
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Number of row blocks
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Averaged colour of block `(x, y)`, `None` outside the grid
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        self.pixels.get_pixel_checked(x, y).map(|p| p.0)
    }

    /// Grid the image was reduced with
    pub const fn partition(&self) -> &CompletedPartition {
        &self.partition
    }

    /// Underlying pixel buffer
    pub const fn as_rgb(&self) -> &RgbImage {
        &self.pixels
    }

    /// Take ownership of the pixel buffer
    pub fn into_rgb(self) -> RgbImage {
        self.pixels
    }
}

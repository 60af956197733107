//! Validated source bitmap

use crate::io::error::{ReduceError, Result};
use image::{DynamicImage, RgbImage};

/// Immutable RGB bitmap with non-zero dimensions
///
/// Alpha is dropped on construction; blocks are averaged over the colour
/// channels only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceImage {
    pixels: RgbImage,
}

impl SourceImage {
    /// Wrap an RGB buffer
    ///
    /// # Errors
    ///
    /// Returns [`ReduceError::InvalidImage`] if the width or height is zero
    pub fn new(pixels: RgbImage) -> Result<Self> {
        let (width, height) = pixels.dimensions();
        if width == 0 || height == 0 {
            return Err(ReduceError::InvalidImage {
                width,
                height,
                reason: "image has no pixels to partition".to_string(),
            });
        }
        Ok(Self { pixels })
    }

    /// Convert any decoded image to RGB and wrap it
    ///
    /// # Errors
    ///
    /// Returns [`ReduceError::InvalidImage`] if the width or height is zero
    pub fn from_dynamic(image: &DynamicImage) -> Result<Self> {
        Self::new(image.to_rgb8())
    }

    /// Build an image where every pixel has the same colour
    ///
    /// # Errors
    ///
    /// Returns [`ReduceError::InvalidImage`] if the width or height is zero
    pub fn filled(width: u32, height: u32, rgb: [u8; 3]) -> Result<Self> {
        Self::new(RgbImage::from_pixel(width, height, image::Rgb(rgb)))
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Channel triple at `(x, y)`, `None` outside the image
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        self.pixels.get_pixel_checked(x, y).map(|p| p.0)
    }

    /// Underlying pixel buffer
    pub const fn as_rgb(&self) -> &RgbImage {
        &self.pixels
    }
}

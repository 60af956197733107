//! Block-averaging reduction of a source image over a completed grid

use crate::partition::engine::CompletedPartition;
use crate::partition::sequence::GridSequence;
use crate::raster::{ReducedImage, SourceImage};
use crate::reduction::rounding::channel_average;
use image::{Rgb, RgbImage};
use log::info;
use ndarray::Array3;

const CHANNELS: usize = 3;

/// Source rectangle collapsed into one output pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    /// Output column
    pub column: usize,
    /// Output row
    pub row: usize,
    /// Left edge in source pixels
    pub x: usize,
    /// Top edge in source pixels
    pub y: usize,
    /// Width in source pixels
    pub width: usize,
    /// Height in source pixels
    pub height: usize,
}

impl Block {
    /// Number of source pixels covered
    pub const fn area(&self) -> usize {
        self.width * self.height
    }
}

/// Tile the source with running offsets along both sequences, row by row
pub fn blocks<'a>(
    grid_x: &'a GridSequence,
    grid_y: &'a GridSequence,
) -> impl Iterator<Item = Block> + 'a {
    grid_y
        .spans()
        .enumerate()
        .flat_map(move |(row, (y, height))| {
            grid_x
                .spans()
                .enumerate()
                .map(move |(column, (x, width))| Block {
                    column,
                    row,
                    x,
                    y,
                    width,
                    height,
                })
        })
}

/// Average every block of the grid into a single pixel
///
/// Output dimensions are `(grid_x.len(), grid_y.len())`. Each channel is the
/// half-to-even rounded mean of that channel over the block's rectangle.
///
/// # Panics
///
/// Panics if a sequence is empty, holds a zero extent, or does not sum to
/// the matching image dimension. The partition engine never produces such
/// sequences, so a violation is a programming error.
pub fn reduce(image: &SourceImage, grid_x: &GridSequence, grid_y: &GridSequence) -> ReducedImage {
    let width = image.width() as usize;
    let height = image.height() as usize;

    assert!(
        !grid_x.is_empty() && !grid_y.is_empty(),
        "grid sequences must not be empty"
    );
    assert!(
        grid_x
            .as_slice()
            .iter()
            .chain(grid_y.as_slice())
            .all(|&extent| extent > 0),
        "grid extents must be positive"
    );
    assert_eq!(grid_x.total(), width, "column widths must sum to image width");
    assert_eq!(grid_y.total(), height, "row heights must sum to image height");

    let column_of = block_lookup(grid_x);
    let row_of = block_lookup(grid_y);

    // Channel sums per block, indexed (row, column, channel)
    let mut sums = Array3::<u64>::zeros((grid_y.len(), grid_x.len(), CHANNELS));
    for (x, y, pixel) in image.as_rgb().enumerate_pixels() {
        let (Some(&column), Some(&row)) = (column_of.get(x as usize), row_of.get(y as usize))
        else {
            continue;
        };
        for (channel, &value) in pixel.0.iter().enumerate() {
            if let Some(sum) = sums.get_mut((row, column, channel)) {
                *sum += u64::from(value);
            }
        }
    }

    let mut pixels = RgbImage::new(grid_x.len() as u32, grid_y.len() as u32);
    for block in blocks(grid_x, grid_y) {
        let count = block.area() as u64;
        let mut rgb = [0u8; CHANNELS];
        for (channel, out) in rgb.iter_mut().enumerate() {
            let sum = sums
                .get((block.row, block.column, channel))
                .copied()
                .unwrap_or(0);
            *out = channel_average(sum, count).unwrap_or(0);
        }
        pixels.put_pixel(block.column as u32, block.row as u32, Rgb(rgb));
    }

    info!(
        "Reduced {width}x{height} image to {}x{}",
        grid_x.len(),
        grid_y.len()
    );

    ReducedImage::new(
        pixels,
        CompletedPartition {
            grid_x: grid_x.clone(),
            grid_y: grid_y.clone(),
        },
    )
}

/// Reduce using the sequences carried by a completion signal
///
/// # Panics
///
/// Panics under the same conditions as [`reduce`].
pub fn reduce_partition(image: &SourceImage, partition: &CompletedPartition) -> ReducedImage {
    reduce(image, &partition.grid_x, &partition.grid_y)
}

// Maps each source coordinate along an axis to the index of its block
fn block_lookup(sequence: &GridSequence) -> Vec<usize> {
    sequence
        .as_slice()
        .iter()
        .enumerate()
        .flat_map(|(index, &extent)| std::iter::repeat_n(index, extent))
        .collect()
}

//! Tests for block tiling and averaged block colours

#[cfg(test)]
mod tests {
    use blockreduce::partition::GridSequence;
    use blockreduce::raster::SourceImage;
    use blockreduce::reduction::reducer::{Block, blocks};
    use blockreduce::reduction::{reduce, reduce_partition};
    use image::{Rgb, RgbImage};

    fn gradient(width: u32, height: u32) -> SourceImage {
        let pixels = RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x * 10) as u8, (y * 20) as u8, ((x + y) * 5) as u8])
        });
        let Ok(image) = SourceImage::new(pixels) else {
            unreachable!("gradient dimensions are non-zero");
        };
        image
    }

    // Tests blocks tile the grid row by row with running offsets
    // Verified by resetting the x offset per block
    #[test]
    fn test_blocks_tiling() {
        let grid_x = GridSequence::from(vec![2, 3]);
        let grid_y = GridSequence::from(vec![1, 4]);

        let tiled: Vec<Block> = blocks(&grid_x, &grid_y).collect();

        assert_eq!(tiled.len(), 4);
        assert_eq!(
            tiled.get(1),
            Some(&Block {
                column: 1,
                row: 0,
                x: 2,
                y: 0,
                width: 3,
                height: 1,
            })
        );
        assert_eq!(
            tiled.get(2),
            Some(&Block {
                column: 0,
                row: 1,
                x: 0,
                y: 1,
                width: 2,
                height: 4,
            })
        );
        assert_eq!(tiled.iter().map(Block::area).sum::<usize>(), 25);
    }

    // Tests a solid red 4x4 image reduces to solid red 2x2
    // Verified by dividing by the block width only
    #[test]
    fn test_solid_colour_round_trip() {
        let Ok(image) = SourceImage::filled(4, 4, [255, 0, 0]) else {
            unreachable!("4x4 image is valid");
        };

        let reduced = reduce(
            &image,
            &GridSequence::from(vec![2, 2]),
            &GridSequence::from(vec![2, 2]),
        );

        assert_eq!((reduced.width(), reduced.height()), (2, 2));
        assert!(reduced.as_rgb().pixels().all(|p| p.0 == [255, 0, 0]));
    }

    // Tests each output pixel is the rounded mean of its own rectangle
    // Verified by reading the source rectangle with swapped offsets
    #[test]
    fn test_block_means() {
        let image = gradient(5, 3);
        let grid_x = GridSequence::from(vec![2, 3]);
        let grid_y = GridSequence::from(vec![1, 2]);

        let reduced = reduce(&image, &grid_x, &grid_y);

        // Block (0, 0): x in 0..2, y = 0 -> red values 0, 10
        assert_eq!(reduced.pixel(0, 0), Some([5, 0, 2]));
        // Block (1, 1): x in 2..5, y in 1..3 -> red 20..40, green 20/40, blue mean 22.5
        assert_eq!(reduced.pixel(1, 1), Some([30, 30, 22]));
    }

    // Tests ties round to the even value
    // Verified by rounding half away from zero
    #[test]
    fn test_half_to_even_output() {
        let mut pixels = RgbImage::new(2, 1);
        pixels.put_pixel(0, 0, Rgb([0, 1, 2]));
        pixels.put_pixel(1, 0, Rgb([1, 2, 5]));
        let Ok(image) = SourceImage::new(pixels) else {
            unreachable!("2x1 image is valid");
        };

        let reduced = reduce(
            &image,
            &GridSequence::from(vec![2]),
            &GridSequence::from(vec![1]),
        );

        // Means 0.5, 1.5, 3.5
        assert_eq!(reduced.pixel(0, 0), Some([0, 2, 4]));
    }

    // Tests every channel stays within its source rectangle's range
    // Verified by averaging over the whole image instead of the block
    #[test]
    fn test_output_within_block_range() {
        let image = gradient(9, 7);
        let grid_x = GridSequence::from(vec![4, 1, 4]);
        let grid_y = GridSequence::from(vec![3, 3, 1]);

        let reduced = reduce(&image, &grid_x, &grid_y);

        for block in blocks(&grid_x, &grid_y) {
            let Some(out) = reduced.pixel(block.column as u32, block.row as u32) else {
                unreachable!("block lies inside the reduced image");
            };
            for channel in 0..3 {
                let values: Vec<u8> = (block.y..block.y + block.height)
                    .flat_map(|y| (block.x..block.x + block.width).map(move |x| (x, y)))
                    .filter_map(|(x, y)| image.pixel(x as u32, y as u32))
                    .filter_map(|p| p.get(channel).copied())
                    .collect();
                let min = values.iter().copied().min().unwrap_or(0);
                let max = values.iter().copied().max().unwrap_or(0);
                let Some(&value) = out.get(channel) else {
                    unreachable!("pixel has three channels");
                };
                assert!((min..=max).contains(&value));
            }
        }
    }

    // Tests reduce_partition uses the carried sequences
    // Verified by swapping the sequences
    #[test]
    fn test_reduce_partition() {
        use blockreduce::partition::CompletedPartition;

        let image = gradient(3, 2);
        let partition = CompletedPartition {
            grid_x: GridSequence::from(vec![3]),
            grid_y: GridSequence::from(vec![1, 1]),
        };

        let reduced = reduce_partition(&image, &partition);

        assert_eq!((reduced.width(), reduced.height()), (1, 2));
        assert_eq!(reduced.pixel(0, 0), Some([10, 0, 5]));
    }

    // Tests sequences not matching the image are treated as a programming error
    // Verified by clamping blocks to the image instead of asserting
    #[test]
    #[should_panic(expected = "column widths must sum to image width")]
    fn test_mismatched_sequence_panics() {
        let image = gradient(4, 4);
        let _ = reduce(
            &image,
            &GridSequence::from(vec![2, 1]),
            &GridSequence::from(vec![4]),
        );
    }
}

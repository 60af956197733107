//! Source image decoding and reduced image export

use crate::io::error::{ReduceError, Result};
use crate::raster::{ReducedImage, SourceImage};
use log::info;
use std::path::Path;

/// Decode an image file into a validated RGB source
///
/// # Errors
///
/// Returns an error if:
/// - The file at the given path cannot be opened or decoded
/// - The decoded image has a zero width or height
pub fn load_source_image<P: AsRef<Path>>(path: P) -> Result<SourceImage> {
    let path = path.as_ref();
    let decoded = image::open(path).map_err(|e| ReduceError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;

    let source = SourceImage::from_dynamic(&decoded)?;
    info!(
        "Loaded '{}' ({}x{})",
        path.display(),
        source.width(),
        source.height()
    );
    Ok(source)
}

/// Save a reduced image, creating the parent directory if needed
///
/// The encoder is chosen from the path extension.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to the specified path
pub fn save_reduced_image<P: AsRef<Path>>(reduced: &ReducedImage, output_path: P) -> Result<()> {
    let output_path = output_path.as_ref();

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| ReduceError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    reduced
        .as_rgb()
        .save(output_path)
        .map_err(|e| ReduceError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    info!(
        "Saved {}x{} reduced image to '{}'",
        reduced.width(),
        reduced.height(),
        output_path.display()
    );
    Ok(())
}

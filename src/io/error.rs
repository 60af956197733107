//! Error types for image loading, partition input and reduced image export

use crate::partition::phase::Axis;
use std::fmt;
use std::path::PathBuf;

/// Main error type for all partitioning and reduction operations
#[derive(Debug)]
pub enum ReduceError {
    /// Failed to decode source image from filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Decoded image cannot be partitioned
    ///
    /// Occurs for images with a zero width or height. The session refuses
    /// to load such an image and keeps whatever state it already had.
    InvalidImage {
        /// Width of the rejected image
        width: u32,
        /// Height of the rejected image
        height: u32,
        /// Description of what's wrong with the image
        reason: String,
    },

    /// Submitted extent would push the current axis past its source dimension
    CapacityExceeded {
        /// Axis being partitioned when the digit was rejected
        axis: Axis,
        /// Extent that was submitted
        requested: usize,
        /// Pixels still unallocated on the axis
        remaining: usize,
    },

    /// Submitted extent is outside the single-digit range
    InvalidDigit {
        /// The rejected value
        value: usize,
    },

    /// Input arrived before any image was loaded
    NoImageLoaded,

    /// Input arrived after both axes were finalised
    ///
    /// Undo is not available once partitioning completes; a new session
    /// has to be started with a fresh load instead.
    SessionComplete,

    /// Command-line parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save reduced image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for ReduceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::InvalidImage {
                width,
                height,
                reason,
            } => {
                write!(f, "Invalid image ({width}x{height}): {reason}")
            }
            Self::CapacityExceeded {
                axis,
                requested,
                remaining,
            } => {
                write!(
                    f,
                    "Not enough pixels remaining on axis {axis}: requested {requested}, {remaining} left"
                )
            }
            Self::InvalidDigit { value } => {
                write!(f, "Block extent {value} is not a digit between 1 and 9")
            }
            Self::NoImageLoaded => write!(f, "No image has been loaded"),
            Self::SessionComplete => {
                write!(f, "Partition is complete, load an image to start again")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for ReduceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl ReduceError {
    /// Whether the error is a rejected keystroke the operator can recover from
    ///
    /// Rejected input leaves the session untouched, so interactive callers
    /// report it and keep reading.
    pub const fn is_rejected_input(&self) -> bool {
        matches!(
            self,
            Self::CapacityExceeded { .. }
                | Self::InvalidDigit { .. }
                | Self::NoImageLoaded
                | Self::SessionComplete
        )
    }
}

/// Convenience type alias for partitioning results
pub type Result<T> = std::result::Result<T, ReduceError>;

impl From<image::ImageError> for ReduceError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for ReduceError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> ReduceError {
    ReduceError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

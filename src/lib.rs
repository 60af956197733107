//! Hand-partitioned block averaging for drastic bitmap downsampling
//!
//! An operator splits a bitmap into a grid of non-uniform column widths and
//! row heights by typing one digit per block. Once both axes are filled,
//! every grid cell collapses to a single pixel holding the cell's average
//! colour.

#![forbid(unsafe_code)]

/// Input/output operations and error handling
pub mod io;
/// Grid partition state machine
pub mod partition;
/// Source and reduced bitmaps
pub mod raster;
/// Block averaging over a completed partition
pub mod reduction;
/// Session orchestration
pub mod workflow;

pub use io::error::{ReduceError, Result};

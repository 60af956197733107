//! Manual grid partitioning
//!
//! This module contains the state machine that turns digit and undo input
//! into column widths and row heights:
//! - Phase and axis definitions
//! - Grid sequences with running totals
//! - Completion statistics
//! - The partition engine itself

/// Digit and undo handling across the three phases
pub mod engine;
/// Partition phases and axes
pub mod phase;
/// Ordered block extents along one axis
pub mod sequence;
/// Progress statistics derived from engine state
pub mod statistics;

pub use engine::{CompletedPartition, PartitionEngine, Signal};
pub use phase::{Axis, Phase};
pub use sequence::GridSequence;
pub use statistics::Statistics;

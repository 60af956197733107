//! Completion statistics derived from partition state

use crate::io::configuration::PHASE_COUNT;
use crate::partition::phase::Phase;

/// Read-only view of partition progress
///
/// Always computed from the engine state after a mutation and never stored
/// alongside it, so it cannot drift from the sequences it describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Statistics {
    /// Phase the engine is in
    pub phase: Phase,
    /// Pixels allocated on the current axis
    pub pixels_done: usize,
    /// Length of the current axis
    pub axis_total: usize,
    /// Pixels allocated across both axes
    pub overall_done: usize,
    /// Combined length of both axes (`W + H`)
    pub overall_total: usize,
}

impl Statistics {
    /// Derive statistics for an image of the given dimensions
    ///
    /// `pixels_done` is the running total of the axis being entered; in
    /// `Complete` it is ignored and both axes count as fully allocated.
    pub const fn compute(phase: Phase, pixels_done: usize, width: usize, height: usize) -> Self {
        let (pixels_done, axis_total, overall_done) = match phase {
            Phase::X => (pixels_done, width, pixels_done),
            Phase::Y => (pixels_done, height, width + pixels_done),
            Phase::Complete => (height, height, width + height),
        };

        Self {
            phase,
            pixels_done,
            axis_total,
            overall_done,
            overall_total: width + height,
        }
    }

    /// Pixels still unallocated on the current axis
    pub const fn remaining(&self) -> usize {
        self.axis_total.saturating_sub(self.pixels_done)
    }

    /// Fraction of both axes allocated, in `0.0..=1.0`
    pub fn fraction(&self) -> f64 {
        if self.overall_total == 0 {
            return 0.0;
        }
        self.overall_done as f64 / self.overall_total as f64
    }

    /// Completion as a percentage with two decimals, e.g. `"37.50%"`
    pub fn percentage_label(&self) -> String {
        format!("{:.2}%", 100.0 * self.fraction())
    }

    /// Phase and axis progress, e.g. `"1 of 2 - 3/8"`
    pub fn progress_label(&self) -> String {
        format!(
            "{} of {PHASE_COUNT} - {}/{}",
            self.phase.ordinal(),
            self.pixels_done,
            self.axis_total
        )
    }
}

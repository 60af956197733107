//! Grid partition state machine driven by digit and undo input
//!
//! The engine walks through three phases. Column widths are entered first
//! until they sum to the image width, then row heights until they sum to the
//! image height. Each accepted digit appends one block extent; undo removes
//! the most recent one, stepping back into column entry when the row
//! sequence is still empty.

use crate::io::configuration::{MAX_DIGIT, MIN_DIGIT};
use crate::io::error::{ReduceError, Result};
use crate::partition::phase::{Axis, Phase};
use crate::partition::sequence::GridSequence;
use crate::partition::statistics::Statistics;
use crate::raster::source::SourceImage;
use log::{debug, info, warn};

/// Both finished sequences, handed to the reducer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedPartition {
    /// Column widths, summing to the image width
    pub grid_x: GridSequence,
    /// Row heights, summing to the image height
    pub grid_y: GridSequence,
}

/// Outcome of an accepted engine operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal {
    /// The current axis total moved without a phase change
    StatisticsChanged(Statistics),
    /// The engine moved between `X` and `Y`, statistics already refreshed
    PhaseChanged {
        /// Phase before the operation
        from: Phase,
        /// Phase after the operation
        to: Phase,
        /// Statistics in the new phase
        statistics: Statistics,
    },
    /// Row entry filled the image height, both sequences are final
    PartitionComplete(CompletedPartition),
    /// Undo requested with nothing to remove; state is unchanged
    EmptyUndo,
}

/// Owns both grid sequences and the phase they are entered in
#[derive(Debug, Clone)]
pub struct PartitionEngine {
    width: usize,
    height: usize,
    phase: Phase,
    grid_x: GridSequence,
    grid_y: GridSequence,
    /// Running total of the current axis, kept in lock-step with its sequence
    pixels_done: usize,
}

impl PartitionEngine {
    /// Create an engine for an image of the given dimensions, in phase `X`
    pub const fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            phase: Phase::X,
            grid_x: GridSequence::new(),
            grid_y: GridSequence::new(),
            pixels_done: 0,
        }
    }

    /// Create an engine sized to a source image
    pub fn for_image(image: &SourceImage) -> Self {
        let engine = Self::new(image.width() as usize, image.height() as usize);
        info!(
            "Partitioning {}x{} image, entering column widths",
            engine.width, engine.height
        );
        engine
    }

    /// Discard all partition state and start over against a new image
    pub fn load(&mut self, image: &SourceImage) -> Statistics {
        *self = Self::for_image(image);
        self.statistics()
    }

    /// Append a block extent to the axis currently being entered
    ///
    /// Completing the column axis moves to row entry; completing the row
    /// axis finalises the partition.
    ///
    /// # Errors
    ///
    /// Returns an error without changing any state if:
    /// - `digit` is outside `1..=9`
    /// - `digit` exceeds the pixels remaining on the current axis
    /// - The partition is already complete
    pub fn submit_digit(&mut self, digit: usize) -> Result<Signal> {
        let Some(axis) = self.phase.axis() else {
            return Err(ReduceError::SessionComplete);
        };

        if !(MIN_DIGIT..=MAX_DIGIT).contains(&digit) {
            return Err(ReduceError::InvalidDigit { value: digit });
        }

        let axis_length = axis.length(self.width, self.height);
        let remaining = axis_length - self.pixels_done;
        if digit > remaining {
            warn!("Rejected extent {digit} on axis {axis}: only {remaining} pixels remaining");
            return Err(ReduceError::CapacityExceeded {
                axis,
                requested: digit,
                remaining,
            });
        }

        self.sequence_mut(axis).push(digit);
        self.pixels_done += digit;
        debug!(
            "Axis {axis}: added extent {digit}, {}/{axis_length}",
            self.pixels_done
        );
        debug_assert_eq!(self.pixels_done, self.sequence(axis).total());

        if self.pixels_done < axis_length {
            return Ok(Signal::StatisticsChanged(self.statistics()));
        }

        match axis {
            Axis::X => {
                self.phase = Phase::Y;
                self.pixels_done = 0;
                info!(
                    "Column entry complete with {} blocks, entering row heights",
                    self.grid_x.len()
                );
                Ok(Signal::PhaseChanged {
                    from: Phase::X,
                    to: Phase::Y,
                    statistics: self.statistics(),
                })
            }
            Axis::Y => {
                self.phase = Phase::Complete;
                info!(
                    "Partition complete: {} columns by {} rows",
                    self.grid_x.len(),
                    self.grid_y.len()
                );
                Ok(Signal::PartitionComplete(CompletedPartition {
                    grid_x: self.grid_x.clone(),
                    grid_y: self.grid_y.clone(),
                }))
            }
        }
    }

    /// Remove the most recently entered extent
    ///
    /// An undo issued right after the column axis filled, while the row
    /// sequence is still empty, returns to column entry and removes the
    /// column extent that completed it.
    ///
    /// # Errors
    ///
    /// Returns [`ReduceError::SessionComplete`] once the partition is final;
    /// the session has to be restarted with a new load instead.
    pub fn undo(&mut self) -> Result<Signal> {
        match self.phase {
            Phase::Complete => Err(ReduceError::SessionComplete),
            Phase::X => {
                let Some(extent) = self.grid_x.pop() else {
                    debug!("Undo ignored: no column extents entered");
                    return Ok(Signal::EmptyUndo);
                };
                self.pixels_done -= extent;
                debug!("Axis x: removed extent {extent}, {}", self.pixels_done);
                Ok(Signal::StatisticsChanged(self.statistics()))
            }
            Phase::Y if self.grid_y.is_empty() => {
                let Some(extent) = self.grid_x.pop() else {
                    return Ok(Signal::EmptyUndo);
                };
                self.phase = Phase::X;
                self.pixels_done = self.width - extent;
                info!("Returned to column entry, removed extent {extent}");
                Ok(Signal::PhaseChanged {
                    from: Phase::Y,
                    to: Phase::X,
                    statistics: self.statistics(),
                })
            }
            Phase::Y => {
                let Some(extent) = self.grid_y.pop() else {
                    return Ok(Signal::EmptyUndo);
                };
                self.pixels_done -= extent;
                debug!("Axis y: removed extent {extent}, {}", self.pixels_done);
                Ok(Signal::StatisticsChanged(self.statistics()))
            }
        }
    }

    /// Current completion statistics
    pub const fn statistics(&self) -> Statistics {
        Statistics::compute(self.phase, self.pixels_done, self.width, self.height)
    }

    /// Phase the engine is in
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Running total of the axis being entered
    pub const fn pixels_done(&self) -> usize {
        self.pixels_done
    }

    /// Column widths entered so far
    pub const fn grid_x(&self) -> &GridSequence {
        &self.grid_x
    }

    /// Row heights entered so far
    pub const fn grid_y(&self) -> &GridSequence {
        &self.grid_y
    }

    /// Image dimensions as (width, height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Pixels still unallocated on the current axis, zero once complete
    pub const fn remaining(&self) -> usize {
        match self.phase.axis() {
            Some(axis) => axis.length(self.width, self.height) - self.pixels_done,
            None => 0,
        }
    }

    const fn sequence(&self, axis: Axis) -> &GridSequence {
        match axis {
            Axis::X => &self.grid_x,
            Axis::Y => &self.grid_y,
        }
    }

    const fn sequence_mut(&mut self, axis: Axis) -> &mut GridSequence {
        match axis {
            Axis::X => &mut self.grid_x,
            Axis::Y => &mut self.grid_y,
        }
    }
}

//! Single owned session tying the source image, partition engine and reducer

use crate::io::error::{ReduceError, Result};
use crate::io::keys::Command;
use crate::partition::engine::{PartitionEngine, Signal};
use crate::partition::phase::Phase;
use crate::partition::statistics::Statistics;
use crate::raster::{ReducedImage, SourceImage};
use crate::reduction::reduce_partition;
use image::RgbImage;
use log::info;

/// Observable result of one session input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The current axis total changed
    StatisticsChanged(Statistics),
    /// Entry moved between columns and rows
    PhaseChanged {
        /// Phase before the input
        from: Phase,
        /// Phase after the input
        to: Phase,
        /// Statistics in the new phase
        statistics: Statistics,
    },
    /// Partition finished and the image was reduced
    ///
    /// The session has already restarted against the same source image.
    Reduced(ReducedImage),
    /// Undo requested with nothing to remove
    EmptyUndo,
}

/// Owns the loaded image and the partition state built on it
///
/// Loading replaces everything. Completing a partition reduces the image
/// exactly once and then restarts as if the same image had been loaded again.
#[derive(Debug, Default)]
pub struct Session {
    loaded: Option<(SourceImage, PartitionEngine)>,
    reductions: usize,
}

impl Session {
    /// Create a session with no image loaded
    pub const fn new() -> Self {
        Self {
            loaded: None,
            reductions: 0,
        }
    }

    /// Replace the image and discard all partition state
    pub fn load(&mut self, image: SourceImage) -> Statistics {
        let engine = PartitionEngine::for_image(&image);
        let statistics = engine.statistics();
        self.loaded = Some((image, engine));
        statistics
    }

    /// Validate a raw buffer and load it
    ///
    /// # Errors
    ///
    /// Returns [`ReduceError::InvalidImage`] for an empty buffer; any
    /// previously loaded image and its partition state are left untouched.
    pub fn load_rgb(&mut self, pixels: RgbImage) -> Result<Statistics> {
        let image = SourceImage::new(pixels)?;
        Ok(self.load(image))
    }

    /// Append a block extent on the current axis
    ///
    /// # Errors
    ///
    /// Returns an error without changing any state if no image is loaded or
    /// the engine rejects the digit.
    pub fn submit_digit(&mut self, digit: usize) -> Result<SessionEvent> {
        let loaded = self.loaded.as_mut().ok_or(ReduceError::NoImageLoaded)?;
        let signal = loaded.1.submit_digit(digit)?;
        Ok(Self::dispatch(loaded, &mut self.reductions, signal))
    }

    /// Remove the most recent block extent
    ///
    /// # Errors
    ///
    /// Returns an error without changing any state if no image is loaded or
    /// the partition is already complete.
    pub fn undo(&mut self) -> Result<SessionEvent> {
        let loaded = self.loaded.as_mut().ok_or(ReduceError::NoImageLoaded)?;
        let signal = loaded.1.undo()?;
        Ok(Self::dispatch(loaded, &mut self.reductions, signal))
    }

    /// Dispatch a translated keystroke
    ///
    /// # Errors
    ///
    /// Propagates the error of the dispatched operation
    pub fn apply(&mut self, command: Command) -> Result<SessionEvent> {
        match command {
            Command::Digit(digit) => self.submit_digit(digit),
            Command::Undo => self.undo(),
        }
    }

    /// Statistics for the loaded image, `None` before the first load
    pub fn statistics(&self) -> Option<Statistics> {
        self.engine().map(PartitionEngine::statistics)
    }

    /// Partition state for the loaded image
    pub fn engine(&self) -> Option<&PartitionEngine> {
        self.loaded.as_ref().map(|(_, engine)| engine)
    }

    /// Loaded source image
    pub fn image(&self) -> Option<&SourceImage> {
        self.loaded.as_ref().map(|(image, _)| image)
    }

    /// Number of reduced images produced since the session was created
    pub const fn reductions(&self) -> usize {
        self.reductions
    }

    fn dispatch(
        (image, engine): &mut (SourceImage, PartitionEngine),
        reductions: &mut usize,
        signal: Signal,
    ) -> SessionEvent {
        match signal {
            Signal::StatisticsChanged(statistics) => SessionEvent::StatisticsChanged(statistics),
            Signal::PhaseChanged {
                from,
                to,
                statistics,
            } => SessionEvent::PhaseChanged {
                from,
                to,
                statistics,
            },
            Signal::EmptyUndo => SessionEvent::EmptyUndo,
            Signal::PartitionComplete(partition) => {
                let reduced = reduce_partition(image, &partition);
                engine.load(image);
                *reductions += 1;
                info!("Reduction {} finished, session restarted", *reductions);
                SessionEvent::Reduced(reduced)
            }
        }
    }
}

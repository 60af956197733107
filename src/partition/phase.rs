//! Partition phases and the axes they operate on

use std::fmt;

/// One of the two independent partitioning dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Columns, partitioned left to right
    X,
    /// Rows, partitioned top to bottom
    Y,
}

impl Axis {
    /// Length of this axis for an image of the given dimensions
    pub const fn length(self, width: usize, height: usize) -> usize {
        match self {
            Self::X => width,
            Self::Y => height,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => write!(f, "x"),
            Self::Y => write!(f, "y"),
        }
    }
}

/// Which axis is being entered, or whether both are final
///
/// Transitions only run forward (`X -> Y -> Complete`) except for the single
/// `Y -> X` step taken by an undo issued right after column entry finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// Column widths are being entered
    #[default]
    X,
    /// Row heights are being entered
    Y,
    /// Both sequences are final and ready for reduction
    Complete,
}

impl Phase {
    /// Axis receiving input in this phase, `None` once complete
    pub const fn axis(self) -> Option<Axis> {
        match self {
            Self::X => Some(Axis::X),
            Self::Y => Some(Axis::Y),
            Self::Complete => None,
        }
    }

    /// One-based phase number shown to the operator
    pub const fn ordinal(self) -> usize {
        match self {
            Self::X => 1,
            Self::Y | Self::Complete => 2,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => write!(f, "columns"),
            Self::Y => write!(f, "rows"),
            Self::Complete => write!(f, "complete"),
        }
    }
}

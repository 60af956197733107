//! Ordered block extents along one axis

/// Ordered list of block extents entered by the operator
///
/// Insertion order defines left-to-right (or top-to-bottom) block order.
/// The running total is kept next to the entries so it never has to be
/// recomputed, and every mutation updates both together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridSequence {
    extents: Vec<usize>,
    total: usize,
}

impl GridSequence {
    /// Create an empty sequence
    pub const fn new() -> Self {
        Self {
            extents: Vec::new(),
            total: 0,
        }
    }

    /// Append an extent to the end of the sequence
    pub fn push(&mut self, extent: usize) {
        self.extents.push(extent);
        self.total += extent;
    }

    /// Remove and return the most recently entered extent
    pub fn pop(&mut self) -> Option<usize> {
        let extent = self.extents.pop()?;
        self.total -= extent;
        Some(extent)
    }

    /// Sum of all extents
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Number of blocks along the axis
    pub const fn len(&self) -> usize {
        self.extents.len()
    }

    /// Whether no extent has been entered
    pub const fn is_empty(&self) -> bool {
        self.extents.is_empty()
    }

    /// Extents in entry order
    pub const fn as_slice(&self) -> &[usize] {
        self.extents.as_slice()
    }

    /// Start offset of every block, paired with its extent
    pub fn spans(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.extents.iter().scan(0, |offset, &extent| {
            let start = *offset;
            *offset += extent;
            Some((start, extent))
        })
    }
}

impl From<Vec<usize>> for GridSequence {
    fn from(extents: Vec<usize>) -> Self {
        let total = extents.iter().sum();
        Self { extents, total }
    }
}

impl From<&[usize]> for GridSequence {
    fn from(extents: &[usize]) -> Self {
        Self::from(extents.to_vec())
    }
}

//! Binary resolution direction assigned to candidate-spelling nodes
//!
//! Once the cut partitions the network, every node resolves to one of two
//! symbolic directions: sharp-leaning (up) or flat-leaning (down). A pitch's
//! two slots always carry opposite tendencies when the barrier constraint
//! holds; the leading slot decides which candidate spelling wins.

use std::fmt;

/// Resolution direction of one candidate-spelling node
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tendency {
    /// Flat-leaning resolution
    Down,
    /// Sharp-leaning resolution
    Up,
}

impl Tendency {
    /// The opposite direction
    #[must_use]
    pub const fn inverted(&self) -> Self {
        match self {
            Self::Down => Self::Up,
            Self::Up => Self::Down,
        }
    }
}

impl fmt::Display for Tendency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Down => write!(f, "down"),
            Self::Up => write!(f, "up"),
        }
    }
}

/// Ordered pair of tendencies, one per node slot of a single pitch
///
/// Slot 0 first. The barrier constraint guarantees the two values differ;
/// equal values indicate a violated invariant and never resolve to a
/// spelling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TendencyPair {
    /// Tendency decoded for slot 0
    pub slot0: Tendency,
    /// Tendency decoded for slot 1
    pub slot1: Tendency,
}

impl TendencyPair {
    /// Create a pair from the two slot tendencies in order
    pub const fn new(slot0: Tendency, slot1: Tendency) -> Self {
        Self { slot0, slot1 }
    }

    /// Test whether the two slots carry opposite tendencies
    pub const fn is_separated(&self) -> bool {
        !matches!(
            (self.slot0, self.slot1),
            (Tendency::Down, Tendency::Down) | (Tendency::Up, Tendency::Up)
        )
    }
}

impl fmt::Display for TendencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.slot0, self.slot1)
    }
}

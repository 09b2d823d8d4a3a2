//! Node identity with explicit source, sink, and internal roles
//!
//! An enumerated role replaces the sentinel-integer convention some flow
//! implementations use for the terminals. The derived ordering places the
//! source first, internal nodes ascending by index, and the sink last, so
//! sorting a node stream and dropping the terminals yields internal nodes in
//! numbering order, which the pairing step of decoding relies on.

use std::fmt;

/// Identity of one node in a flow network
///
/// For an input sequence of `n` pitches the internal nodes are numbered
/// `0..2n`; pitch `i` owns exactly `Internal(2i)` (slot 0) and
/// `Internal(2i + 1)` (slot 1). Nodes are never aliased across pitches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Node {
    /// Universal source terminal
    Source,
    /// Internal node owned by one pitch slot
    Internal(usize),
    /// Universal sink terminal
    Sink,
}

impl Node {
    /// Extract the internal index, if this node is not a terminal
    pub const fn internal_index(&self) -> Option<usize> {
        match self {
            Self::Internal(index) => Some(*index),
            Self::Source | Self::Sink => None,
        }
    }

    /// Test whether this node is the source or sink terminal
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Source | Self::Sink)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source => write!(f, "source"),
            Self::Internal(index) => write!(f, "node {index}"),
            Self::Sink => write!(f, "sink"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Node;

    #[test]
    fn test_ordering_places_terminals_at_extremes() {
        let mut nodes = vec![
            Node::Sink,
            Node::Internal(1),
            Node::Source,
            Node::Internal(0),
        ];
        nodes.sort();
        assert_eq!(
            nodes,
            vec![
                Node::Source,
                Node::Internal(0),
                Node::Internal(1),
                Node::Sink,
            ]
        );
    }
}

//! Error types for spelling computations
//!
//! All failures are terminal for the invocation that raised them: the
//! computation is deterministic and pure, so retrying with identical input
//! reproduces the identical failure. No partial output is ever returned.

use std::fmt;

use crate::pitch::PitchClass;
use crate::pitch::tendency::TendencyPair;
use crate::speller::cost::LookupIndex;

/// Main error type for all spelling operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpellerError {
    /// Cost model has no weight for a pair the graph builder queried
    ///
    /// Raised before the cut runs; the builder never substitutes a silent
    /// default for a missing entry.
    MissingCost {
        /// Lookup index of the edge's tail node
        from: LookupIndex,
        /// Lookup index of the edge's head node
        to: LookupIndex,
    },

    /// A computed partition failed to keep a pitch's node pair coupled
    ///
    /// Indicates a modeling bug (a barrier edge was cut) rather than bad
    /// input; the barrier construction should make this unreachable.
    BarrierViolated {
        /// Index of the pitch whose nodes resolved to equal tendencies
        pitch_index: usize,
    },

    /// No valid notation exists for a pitch class and tendency combination
    Unspellable {
        /// Pitch class that failed to resolve
        class: PitchClass,
        /// Tendency pair that has no entry in the resolution table
        pair: TendencyPair,
    },

    /// An augmenting path contained no finite-capacity arc
    ///
    /// Only reachable with a caller-constructed network in which some
    /// source-to-sink path consists entirely of barrier edges; the speller's
    /// builder always attaches finite unit edges at the source and sink.
    UnboundedFlow,
}

impl fmt::Display for SpellerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCost { from, to } => {
                write!(f, "cost model has no weight for pair {from} -> {to}")
            }
            Self::BarrierViolated { pitch_index } => {
                write!(
                    f,
                    "barrier invariant violated: both nodes of pitch {pitch_index} resolved to the same tendency"
                )
            }
            Self::Unspellable { class, pair } => {
                write!(
                    f,
                    "no valid spelling for pitch class {class} with tendencies {pair}"
                )
            }
            Self::UnboundedFlow => {
                write!(f, "augmenting path has no finite arc; flow is unbounded")
            }
        }
    }
}

impl std::error::Error for SpellerError {}

/// Convenience type alias for spelling results
pub type Result<T> = std::result::Result<T, SpellerError>;

#[cfg(test)]
mod tests {
    use super::SpellerError;

    #[test]
    fn test_barrier_violation_display_names_pitch() {
        let error = SpellerError::BarrierViolated { pitch_index: 3 };
        let message = error.to_string();
        assert!(message.contains("pitch 3"), "unexpected message: {message}");
    }
}

//! Pitch spelling by reduction to a minimum s-t cut over a flow network
//!
//! The system assigns notation spellings (letter name + accidental) to a
//! sequence of unspelled pitches. Each pitch contributes two candidate-spelling
//! nodes to a capacitated directed graph; a cost model weights the edges, hard
//! barrier edges couple the two nodes of one pitch, and the minimum cut's
//! partition decodes into per-pitch tendency assignments and final spellings.

#![forbid(unsafe_code)]

/// Error types for graph construction, cut computation, and spelling resolution
pub mod error;
/// Capacitated directed graph primitives and the minimum-cut solver
pub mod graph;
/// Pitch, pitch-class, tendency, and spelled-pitch data model
pub mod pitch;
/// Cost model, network construction, cut decoding, and spelling orchestration
pub mod speller;

pub use error::{Result, SpellerError};
pub use speller::executor::{PitchSpeller, spell};

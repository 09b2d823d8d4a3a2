//! Cost model, network construction, cut decoding, and spelling orchestration
//!
//! The speller reduces pitch spelling to a minimum s-t cut:
//! pitch sequence + cost model -> graph -> cut -> partition -> tendency
//! assignment -> spelled pitches. All state is constructed fresh per call and
//! discarded once the spelled sequence is produced.

/// Node metadata and tendency decoding from the cut partition
pub mod assignment;
/// Pairwise spelling cost lookup table
pub mod cost;
/// Orchestration of network construction, cut, and resolution
pub mod executor;
/// Flow network construction from a pitch sequence
pub mod network;

pub use cost::{CostModel, LookupIndex, LookupPair};
pub use executor::PitchSpeller;

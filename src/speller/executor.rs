//! Orchestration of network construction, cut, and resolution
//!
//! The single entry point builds the flow network from the input pitches,
//! computes the minimum-cut partition, decodes it into tendency pairs, and
//! resolves each pair to an octave-registered spelled pitch. Either a full
//! spelled sequence is returned, index-aligned with the input, or one of the
//! named errors propagates; there is no partial output mode.

use crate::error::Result;
use crate::pitch::resolution::resolve;
use crate::pitch::spelling::SpelledPitch;
use crate::pitch::{Pitch, PitchClass};
use crate::speller::assignment::{assign, tendency_pairs};
use crate::speller::cost::CostModel;
use crate::speller::network::build_network;

/// Pitch speller bound to a cost model and parsimony pivot
///
/// The model is read-only and safely shared; each call to `spell` owns its
/// own network and node set, so independent sequences may be spelled
/// concurrently against one speller.
#[derive(Clone, Copy, Debug)]
pub struct PitchSpeller<'a> {
    model: &'a CostModel,
    pivot: PitchClass,
}

impl<'a> PitchSpeller<'a> {
    /// Bind a cost model and a reference pitch class for tie-breaking
    pub const fn new(model: &'a CostModel, pivot: PitchClass) -> Self {
        Self { model, pivot }
    }

    /// Spell an ordered sequence of pitches
    ///
    /// Returns one spelled pitch per input pitch, index-aligned. An empty
    /// input yields an empty output without error. Two calls with identical
    /// pitches, model, and pivot produce identical output.
    ///
    /// # Errors
    ///
    /// - `SpellerError::MissingCost` if the model lacks a queried pair
    /// - `SpellerError::BarrierViolated` if the cut separated a pitch's nodes
    /// - `SpellerError::Unspellable` if a tendency pair resolves to no
    ///   notation
    pub fn spell(&self, pitches: &[Pitch]) -> Result<Vec<SpelledPitch>> {
        if pitches.is_empty() {
            return Ok(Vec::new());
        }

        let (mut network, infos) = build_network(pitches, self.model, self.pivot)?;
        let (source_side, _sink_side) = network.partitions()?;

        let assigned = assign(&infos, &source_side);
        let pairs = tendency_pairs(&assigned)?;

        let mut spelled = Vec::with_capacity(pitches.len());
        for (pitch, pair) in pitches.iter().zip(pairs) {
            let spelling = resolve(pitch.class(), pair)?;
            spelled.push(SpelledPitch::register(*pitch, spelling));
        }
        Ok(spelled)
    }
}

/// Spell a pitch sequence against a cost model and parsimony pivot
///
/// Convenience wrapper constructing a one-shot `PitchSpeller`.
///
/// # Errors
///
/// Propagates every error of [`PitchSpeller::spell`].
pub fn spell(pitches: &[Pitch], model: &CostModel, pivot: PitchClass) -> Result<Vec<SpelledPitch>> {
    PitchSpeller::new(model, pivot).spell(pitches)
}

//! Node metadata and tendency decoding from the cut partition
//!
//! Links every internal node back to its (pitch index, slot) origin, decodes
//! the partition into per-node tendencies, and groups the result into one
//! tendency pair per pitch. Decoding canonicalizes by node order, so the
//! outcome is independent of the iteration order that produced the sets.
//!
//! Slot 1 decodes with inverted polarity. The barrier edges couple a pitch's
//! two nodes onto one side of the cut; inverting the second slot turns that
//! coupling into the guarantee that the two slots always carry opposite
//! tendencies.

use std::collections::BTreeSet;

use crate::error::{Result, SpellerError};
use crate::graph::node::Node;
use crate::pitch::tendency::{Tendency, TendencyPair};

/// Link from an internal node back to its pitch and slot, before the cut
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnassignedNodeInfo {
    /// The node this metadata describes
    pub node: Node,
    /// Index of the owning pitch in the input sequence
    pub pitch_index: usize,
    /// Slot within the pitch: 0 or 1
    pub slot: usize,
}

/// Node metadata carrying the tendency determined by the cut
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AssignedNodeInfo {
    /// The node this metadata describes
    pub node: Node,
    /// Index of the owning pitch in the input sequence
    pub pitch_index: usize,
    /// Slot within the pitch: 0 or 1
    pub slot: usize,
    /// Tendency decoded from the node's side of the cut
    pub tendency: Tendency,
}

/// Decode the cut partition into per-node tendency assignments
///
/// Slot 0 maps the source side to `Down` and the sink side to `Up`; slot 1
/// maps the complement.
pub fn assign(
    infos: &[UnassignedNodeInfo],
    source_side: &BTreeSet<Node>,
) -> Vec<AssignedNodeInfo> {
    infos
        .iter()
        .map(|info| {
            let base = if source_side.contains(&info.node) {
                Tendency::Down
            } else {
                Tendency::Up
            };
            let tendency = if info.slot == 0 { base } else { base.inverted() };
            AssignedNodeInfo {
                node: info.node,
                pitch_index: info.pitch_index,
                slot: info.slot,
                tendency,
            }
        })
        .collect()
}

/// Group assigned nodes into one tendency pair per pitch
///
/// Sorts by node identity ascending, drops any terminal entries, and pairs
/// consecutive slots; this relies on each pitch owning two adjacently
/// numbered nodes.
///
/// # Errors
///
/// Returns `SpellerError::BarrierViolated` if some pitch's two slots decoded
/// to equal tendencies, meaning a barrier edge was cut.
pub fn tendency_pairs(assigned: &[AssignedNodeInfo]) -> Result<Vec<TendencyPair>> {
    let mut sorted: Vec<AssignedNodeInfo> = assigned
        .iter()
        .copied()
        .filter(|info| !info.node.is_terminal())
        .collect();
    sorted.sort_by_key(|info| info.node);

    let mut pairs = Vec::with_capacity(sorted.len() / 2);
    for chunk in sorted.chunks_exact(2) {
        let &[first, second] = chunk else { continue };
        let pair = TendencyPair::new(first.tendency, second.tendency);
        if !pair.is_separated() || first.pitch_index != second.pitch_index {
            return Err(SpellerError::BarrierViolated {
                pitch_index: first.pitch_index,
            });
        }
        pairs.push(pair);
    }
    Ok(pairs)
}

//! Flow network construction from a pitch sequence
//!
//! For `n` pitches the network holds the two terminals plus internal nodes
//! `0..2n`, pitch `i` owning nodes `2i` and `2i + 1`. Every internal node
//! carries a unit edge from the source and a unit edge to the sink; the
//! slot-0 edges additionally carry the parsimony bias toward the pivot.
//! Nodes of different pitches are joined in both directions by soft-cost
//! edges from the model; the two nodes of one pitch are coupled by barrier
//! edges in both directions, so no minimum cut can separate them while any
//! all-finite cut exists.

use crate::error::{Result, SpellerError};
use crate::graph::capacity::Capacity;
use crate::graph::flow::FlowNetwork;
use crate::graph::node::Node;
use crate::graph::weighted::WeightedGraph;
use crate::pitch::tendency::Tendency;
use crate::pitch::{Pitch, PitchClass};
use crate::speller::assignment::UnassignedNodeInfo;
use crate::speller::cost::{CostModel, LookupIndex, LookupPair, pivot_distance};

/// Scale applied to soft pairwise costs before edge insertion
///
/// Keeps every soft edge far below the unit source and sink edges, so the
/// pairwise terms perturb which side a pitch pair lands on without ever
/// outweighing the per-node unit structure. Barrier dominance itself is
/// structural and needs no tuning.
const SOFT_COST_SCALE: f64 = 1e-3;

/// Scale applied to the parsimony-pivot bias on slot-0 terminal edges
const PIVOT_BIAS_SCALE: f64 = 1e-3;

/// Build the flow network for a pitch sequence
///
/// Returns the network together with the metadata linking every internal
/// node back to its (pitch index, slot) origin. Missing cost-model entries
/// surface before the cut runs; no silent default is substituted.
///
/// # Errors
///
/// Returns `SpellerError::MissingCost` if the model lacks a pair the builder
/// queries.
pub fn build_network(
    pitches: &[Pitch],
    model: &CostModel,
    pivot: PitchClass,
) -> Result<(FlowNetwork, Vec<UnassignedNodeInfo>)> {
    let mut graph = WeightedGraph::new();
    graph.insert_node(Node::Source);
    graph.insert_node(Node::Sink);

    let mut infos = Vec::with_capacity(pitches.len() * 2);

    for (pitch_index, pitch) in pitches.iter().enumerate() {
        let class = pitch.class();
        let slot0 = Node::Internal(2 * pitch_index);
        let slot1 = Node::Internal(2 * pitch_index + 1);
        graph.insert_node(slot0);
        graph.insert_node(slot1);
        infos.push(UnassignedNodeInfo {
            node: slot0,
            pitch_index,
            slot: 0,
        });
        infos.push(UnassignedNodeInfo {
            node: slot1,
            pitch_index,
            slot: 1,
        });

        // Cutting source -> slot0 lands the pitch on the sink side (sharp
        // resolution); cutting slot0 -> sink lands it on the source side
        // (flat resolution). The bias prices each outcome by its candidate's
        // distance from the pivot.
        let sharp_bias = PIVOT_BIAS_SCALE
            * pivot_distance(LookupIndex::new(class, Tendency::Up), pivot);
        let flat_bias = PIVOT_BIAS_SCALE
            * pivot_distance(LookupIndex::new(class, Tendency::Down), pivot);

        graph.insert_edge(Node::Source, slot0, Capacity::Finite(1.0 + sharp_bias));
        graph.insert_edge(slot0, Node::Sink, Capacity::Finite(1.0 + flat_bias));
        graph.insert_edge(Node::Source, slot1, Capacity::Finite(1.0));
        graph.insert_edge(slot1, Node::Sink, Capacity::Finite(1.0));

        // Hard constraint: couple the pitch's two nodes
        graph.insert_edge(slot0, slot1, Capacity::Barrier(1));
        graph.insert_edge(slot1, slot0, Capacity::Barrier(1));
    }

    insert_soft_edges(&mut graph, pitches, model)?;

    Ok((FlowNetwork::new(graph), infos))
}

/// Join every node pair across different pitches with scaled model costs
fn insert_soft_edges(
    graph: &mut WeightedGraph<Node>,
    pitches: &[Pitch],
    model: &CostModel,
) -> Result<()> {
    for (i, first) in pitches.iter().enumerate() {
        for (j, second) in pitches.iter().enumerate().skip(i + 1) {
            for from_slot in 0..2_usize {
                for to_slot in 0..2_usize {
                    let from_node = Node::Internal(2 * i + from_slot);
                    let to_node = Node::Internal(2 * j + to_slot);
                    let from = LookupIndex::new(first.class(), slot_tendency(from_slot));
                    let to = LookupIndex::new(second.class(), slot_tendency(to_slot));

                    let forward = lookup(model, from, to)?;
                    let backward = lookup(model, to, from)?;
                    graph.insert_edge(from_node, to_node, scaled(forward));
                    graph.insert_edge(to_node, from_node, scaled(backward));
                }
            }
        }
    }
    Ok(())
}

/// Intrinsic tendency index of a node slot
const fn slot_tendency(slot: usize) -> Tendency {
    if slot == 0 { Tendency::Down } else { Tendency::Up }
}

/// Query the model, reporting absence as a configuration error
fn lookup(model: &CostModel, from: LookupIndex, to: LookupIndex) -> Result<Capacity> {
    model
        .weight(&LookupPair::new(from, to))
        .ok_or(SpellerError::MissingCost { from, to })
}

/// Scale a soft cost; barriers pass through untouched
const fn scaled(capacity: Capacity) -> Capacity {
    match capacity {
        Capacity::Finite(value) => Capacity::Finite(value * SOFT_COST_SCALE),
        Capacity::Barrier(multiplier) => Capacity::Barrier(multiplier),
    }
}

//! Generic directed edge container keyed by node pairs
//!
//! Stores at most one capacity per ordered node pair, plus a sorted adjacency
//! index recording both endpoints of every edge. The residual search needs to
//! traverse reverse arcs, and the sorted index gives every traversal a fixed,
//! reproducible visiting order.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::hash::Hash;

use crate::graph::capacity::Capacity;

/// Directed capacitated graph over a generic node identifier
///
/// Edge insertion does not insert nodes implicitly; callers insert nodes
/// first, which keeps the invariant that every node referenced by an edge is
/// present in the node set.
#[derive(Clone, Debug, Default)]
pub struct WeightedGraph<N> {
    nodes: BTreeSet<N>,
    edges: HashMap<(N, N), Capacity>,
    adjacency: BTreeMap<N, BTreeSet<N>>,
}

impl<N> WeightedGraph<N>
where
    N: Copy + Ord + Hash,
{
    /// Create an empty graph
    pub fn new() -> Self {
        Self {
            nodes: BTreeSet::new(),
            edges: HashMap::new(),
            adjacency: BTreeMap::new(),
        }
    }

    /// Insert a node, returning whether it was newly added
    pub fn insert_node(&mut self, node: N) -> bool {
        self.nodes.insert(node)
    }

    /// Test node membership
    pub fn contains_node(&self, node: N) -> bool {
        self.nodes.contains(&node)
    }

    /// Number of nodes in the graph
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of directed edges in the graph
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Iterate nodes in ascending order
    pub fn nodes(&self) -> impl Iterator<Item = N> + '_ {
        self.nodes.iter().copied()
    }

    /// Insert a directed edge, overwriting any existing capacity for the pair
    pub fn insert_edge(&mut self, from: N, to: N, capacity: Capacity) {
        self.edges.insert((from, to), capacity);
        self.adjacency.entry(from).or_default().insert(to);
        self.adjacency.entry(to).or_default().insert(from);
    }

    /// Remove a directed edge, returning its capacity if it existed
    ///
    /// Adjacency entries are retained while the opposite direction still
    /// carries an edge.
    pub fn remove_edge(&mut self, from: N, to: N) -> Option<Capacity> {
        let removed = self.edges.remove(&(from, to));
        if removed.is_some() && !self.edges.contains_key(&(to, from)) {
            if let Some(neighbors) = self.adjacency.get_mut(&from) {
                neighbors.remove(&to);
            }
            if let Some(neighbors) = self.adjacency.get_mut(&to) {
                neighbors.remove(&from);
            }
        }
        removed
    }

    /// Capacity of the directed edge from one node to another, if present
    pub fn capacity(&self, from: N, to: N) -> Option<Capacity> {
        self.edges.get(&(from, to)).copied()
    }

    /// Iterate the neighbors of a node in ascending order
    ///
    /// A neighbor is any node sharing an edge in either direction; the flow
    /// solver traverses reverse arcs through the same index.
    pub fn neighbors(&self, of: N) -> impl Iterator<Item = N> + '_ {
        self.adjacency
            .get(&of)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    /// Iterate directed edges in deterministic (sorted endpoint) order
    pub fn edges(&self) -> impl Iterator<Item = (N, N, Capacity)> + '_ {
        self.adjacency.iter().flat_map(move |(&from, neighbors)| {
            neighbors.iter().filter_map(move |&to| {
                self.edges
                    .get(&(from, to))
                    .map(|&capacity| (from, to, capacity))
            })
        })
    }
}

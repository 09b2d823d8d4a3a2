//! Flow network wrapper and minimum s-t cut computation
//!
//! Runs breadth-first augmenting paths (Edmonds-Karp) from source to sink
//! until the residual graph admits no further path; residual reachability
//! from the source then yields the minimum cut by max-flow/min-cut duality.
//!
//! Ties between equal-cost cuts are broken by a fixed rule: the breadth-first
//! search expands neighbors in ascending node order, so repeated runs over
//! identical input produce identical partitions.

use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};

use bitvec::prelude::*;
use num_traits::Zero;

use crate::error::{Result, SpellerError};
use crate::graph::capacity::Capacity;
use crate::graph::node::Node;
use crate::graph::weighted::WeightedGraph;

/// Residual capacities at or below this threshold count as exhausted
///
/// Repeated augmentation over finite costs leaves float dust; treating it as
/// positive capacity would stall the search on unusable arcs.
const RESIDUAL_EPSILON: f64 = 1e-9;

/// Capacitated directed graph with designated source and sink terminals
///
/// Owns the graph for the duration of one cut computation; a network is not
/// reused across calls with different inputs. Solving is idempotent: the
/// first query runs the max-flow loop, later queries reuse the result.
#[derive(Debug)]
pub struct FlowNetwork {
    graph: WeightedGraph<Node>,
    flow: HashMap<(Node, Node), f64>,
    flow_value: f64,
    augmentations: usize,
    internal_limit: usize,
    solved: bool,
}

impl FlowNetwork {
    /// Wrap a graph, inserting the source and sink terminals if absent
    pub fn new(mut graph: WeightedGraph<Node>) -> Self {
        graph.insert_node(Node::Source);
        graph.insert_node(Node::Sink);
        let internal_limit = graph
            .nodes()
            .filter_map(|node| node.internal_index())
            .max()
            .map_or(0, |index| index + 1);

        Self {
            graph,
            flow: HashMap::new(),
            flow_value: 0.0,
            augmentations: 0,
            internal_limit,
            solved: false,
        }
    }

    /// Access the underlying graph
    pub const fn graph(&self) -> &WeightedGraph<Node> {
        &self.graph
    }

    /// Number of augmenting paths pushed so far
    pub const fn augmentations(&self) -> usize {
        self.augmentations
    }

    /// Compute the maximum flow value from source to sink
    ///
    /// # Errors
    ///
    /// Returns `SpellerError::UnboundedFlow` if some augmenting path contains
    /// no finite-capacity arc.
    pub fn max_flow(&mut self) -> Result<f64> {
        self.solve()?;
        Ok(self.flow_value)
    }

    /// Partition the internal nodes into source side and sink side
    ///
    /// The source side is the set of internal nodes still reachable from the
    /// source in the residual graph after the flow is maximal; the sink side
    /// is the rest. The two sets are disjoint and together cover exactly the
    /// internal nodes. An empty network yields two empty sets.
    ///
    /// # Errors
    ///
    /// Returns `SpellerError::UnboundedFlow` if some augmenting path contains
    /// no finite-capacity arc.
    pub fn partitions(&mut self) -> Result<(BTreeSet<Node>, BTreeSet<Node>)> {
        self.solve()?;
        let reachable = self.reachability();

        let mut source_side = BTreeSet::new();
        let mut sink_side = BTreeSet::new();
        for node in self.graph.nodes() {
            if let Some(index) = node.internal_index() {
                if reachable.get(index).as_deref() == Some(&true) {
                    source_side.insert(node);
                } else {
                    sink_side.insert(node);
                }
            }
        }
        Ok((source_side, sink_side))
    }

    /// Total capacity of the edges crossing the minimum cut
    ///
    /// Sums capacities of edges leading from the source partition (including
    /// the source terminal) into the sink partition (including the sink
    /// terminal). Equals the maximum flow value when every cut edge is
    /// finite.
    ///
    /// # Errors
    ///
    /// Returns `SpellerError::UnboundedFlow` if some augmenting path contains
    /// no finite-capacity arc.
    pub fn cut_value(&mut self) -> Result<Capacity> {
        self.solve()?;
        let reachable = self.reachability();

        let mut total = Capacity::zero();
        for (from, to, capacity) in self.graph.edges() {
            if Self::on_source_side(from, &reachable) && !Self::on_source_side(to, &reachable) {
                total += capacity;
            }
        }
        Ok(total)
    }

    /// Run the augmenting-path loop to completion
    ///
    /// # Errors
    ///
    /// Returns `SpellerError::UnboundedFlow` if some augmenting path contains
    /// no finite-capacity arc.
    pub fn solve(&mut self) -> Result<()> {
        if self.solved {
            return Ok(());
        }
        while let Some(path) = self.shortest_augmenting_path() {
            let pushed = self.augment(&path)?;
            self.flow_value += pushed;
            self.augmentations += 1;
        }
        self.solved = true;
        Ok(())
    }

    /// Breadth-first search for the shortest residual path from source to sink
    ///
    /// Neighbors are expanded in ascending node order; this is the
    /// determinism tie-break for the whole computation.
    fn shortest_augmenting_path(&self) -> Option<Vec<Node>> {
        let mut visited = bitvec![0; self.internal_limit];
        let mut parents: BTreeMap<Node, Node> = BTreeMap::new();
        let mut queue = VecDeque::from([Node::Source]);

        while let Some(current) = queue.pop_front() {
            for neighbor in self.graph.neighbors(current) {
                if neighbor == Node::Source {
                    continue;
                }
                if let Some(index) = neighbor.internal_index() {
                    if visited.get(index).as_deref() == Some(&true) {
                        continue;
                    }
                }
                if !self
                    .residual_capacity(current, neighbor)
                    .exceeds(RESIDUAL_EPSILON)
                {
                    continue;
                }
                parents.insert(neighbor, current);
                if neighbor == Node::Sink {
                    return Some(Self::backtrack(&parents));
                }
                if let Some(index) = neighbor.internal_index() {
                    visited.set(index, true);
                }
                queue.push_back(neighbor);
            }
        }
        None
    }

    /// Reconstruct the source-to-sink path from breadth-first parent links
    fn backtrack(parents: &BTreeMap<Node, Node>) -> Vec<Node> {
        let mut path = vec![Node::Sink];
        let mut current = Node::Sink;
        while let Some(&parent) = parents.get(&current) {
            path.push(parent);
            current = parent;
            if current == Node::Source {
                break;
            }
        }
        path.reverse();
        path
    }

    /// Push the bottleneck amount along a path, cancelling reverse flow first
    fn augment(&mut self, path: &[Node]) -> Result<f64> {
        let mut bottleneck: Option<f64> = None;
        for window in path.windows(2) {
            let &[from, to] = window else { continue };
            if let Some(residual) = self.residual_capacity(from, to).as_finite() {
                bottleneck = Some(bottleneck.map_or(residual, |current| current.min(residual)));
            }
        }
        let bottleneck = bottleneck.ok_or(SpellerError::UnboundedFlow)?;

        for window in path.windows(2) {
            let &[from, to] = window else { continue };
            let reverse = self.flow_at(to, from);
            let cancelled = reverse.min(bottleneck);
            if cancelled > 0.0 {
                self.set_flow(to, from, reverse - cancelled);
            }
            let pushed = bottleneck - cancelled;
            if pushed > 0.0 {
                let updated = self.flow_at(from, to) + pushed;
                self.set_flow(from, to, updated);
            }
        }
        Ok(bottleneck)
    }

    /// Residual capacity of an arc: unused forward capacity plus reverse flow
    ///
    /// A barrier arc stays a barrier under any finite flow; an arc with no
    /// forward capacity is traversable only by cancelling reverse flow.
    fn residual_capacity(&self, from: Node, to: Node) -> Capacity {
        let forward = self
            .graph
            .capacity(from, to)
            .map_or(Capacity::Finite(0.0), |capacity| {
                capacity.reduce(self.flow_at(from, to))
            });
        forward + Capacity::Finite(self.flow_at(to, from))
    }

    /// Residual reachability of internal nodes from the source
    fn reachability(&self) -> BitVec {
        let mut reachable = bitvec![0; self.internal_limit];
        let mut queue = VecDeque::from([Node::Source]);

        while let Some(current) = queue.pop_front() {
            for neighbor in self.graph.neighbors(current) {
                let Some(index) = neighbor.internal_index() else {
                    continue;
                };
                if reachable.get(index).as_deref() == Some(&true) {
                    continue;
                }
                if !self
                    .residual_capacity(current, neighbor)
                    .exceeds(RESIDUAL_EPSILON)
                {
                    continue;
                }
                reachable.set(index, true);
                queue.push_back(neighbor);
            }
        }
        reachable
    }

    /// Test which side of the cut a node falls on
    fn on_source_side(node: Node, reachable: &BitVec) -> bool {
        match node {
            Node::Source => true,
            Node::Sink => false,
            Node::Internal(index) => reachable.get(index).as_deref() == Some(&true),
        }
    }

    fn flow_at(&self, from: Node, to: Node) -> f64 {
        self.flow.get(&(from, to)).copied().unwrap_or(0.0)
    }

    fn set_flow(&mut self, from: Node, to: Node, value: f64) {
        if value <= RESIDUAL_EPSILON {
            self.flow.remove(&(from, to));
        } else {
            self.flow.insert((from, to), value);
        }
    }
}

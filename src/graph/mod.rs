//! Capacitated directed graph primitives
//!
//! This module contains the combinatorial substrate of the speller:
//! - Capacity arithmetic with barrier dominance
//! - Node identity with reserved source and sink roles
//! - Generic weighted edge storage
//! - The minimum s-t cut solver

/// Capacity value type with finite and barrier variants
pub mod capacity;
/// Flow network wrapper and minimum-cut computation
pub mod flow;
/// Node identity with explicit source, sink, and internal roles
pub mod node;
/// Generic directed edge container keyed by node pairs
pub mod weighted;

pub use capacity::Capacity;
pub use flow::FlowNetwork;
pub use node::Node;
pub use weighted::WeightedGraph;

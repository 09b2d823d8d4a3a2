//! Validates weighted graph operations and the minimum-cut solver

use spellcut::SpellerError;
use spellcut::graph::{Capacity, FlowNetwork, Node, WeightedGraph};

fn unit(value: f64) -> Capacity {
    Capacity::Finite(value)
}

#[test]
fn test_insert_and_remove_edges() {
    let mut graph = WeightedGraph::new();
    graph.insert_node(Node::Internal(0));
    graph.insert_node(Node::Internal(1));
    graph.insert_edge(Node::Internal(0), Node::Internal(1), unit(2.0));

    assert_eq!(
        graph.capacity(Node::Internal(0), Node::Internal(1)),
        Some(unit(2.0))
    );
    assert_eq!(graph.capacity(Node::Internal(1), Node::Internal(0)), None);

    let removed = graph.remove_edge(Node::Internal(0), Node::Internal(1));
    assert_eq!(removed, Some(unit(2.0)));
    assert_eq!(graph.capacity(Node::Internal(0), Node::Internal(1)), None);
}

#[test]
fn test_neighbors_include_reverse_endpoints_in_order() {
    let mut graph = WeightedGraph::new();
    for index in 0..3 {
        graph.insert_node(Node::Internal(index));
    }
    graph.insert_edge(Node::Internal(2), Node::Internal(1), unit(1.0));
    graph.insert_edge(Node::Internal(0), Node::Internal(1), unit(1.0));

    let neighbors: Vec<Node> = graph.neighbors(Node::Internal(1)).collect();
    assert_eq!(neighbors, vec![Node::Internal(0), Node::Internal(2)]);
}

#[test]
fn test_max_flow_on_classic_network() {
    let mut graph = WeightedGraph::new();
    graph.insert_node(Node::Source);
    graph.insert_node(Node::Sink);
    graph.insert_node(Node::Internal(0));
    graph.insert_node(Node::Internal(1));

    graph.insert_edge(Node::Source, Node::Internal(0), unit(3.0));
    graph.insert_edge(Node::Source, Node::Internal(1), unit(2.0));
    graph.insert_edge(Node::Internal(0), Node::Internal(1), unit(1.0));
    graph.insert_edge(Node::Internal(0), Node::Sink, unit(2.0));
    graph.insert_edge(Node::Internal(1), Node::Sink, unit(3.0));

    let mut network = FlowNetwork::new(graph);
    let Ok(flow) = network.max_flow() else {
        unreachable!("finite network must solve");
    };
    assert!((flow - 5.0).abs() < 1e-9, "expected flow 5, got {flow}");

    let Ok(cut) = network.cut_value() else {
        unreachable!("finite network must produce a cut");
    };
    let Some(cut_total) = cut.as_finite() else {
        unreachable!("all-finite network must have a finite cut");
    };
    assert!((cut_total - flow).abs() < 1e-9);
}

#[test]
fn test_barrier_edge_is_never_cut_while_finite_cut_exists() {
    let mut graph = WeightedGraph::new();
    graph.insert_node(Node::Source);
    graph.insert_node(Node::Sink);
    graph.insert_node(Node::Internal(0));
    graph.insert_node(Node::Internal(1));

    graph.insert_edge(Node::Source, Node::Internal(0), unit(10.0));
    graph.insert_edge(Node::Internal(0), Node::Internal(1), Capacity::Barrier(1));
    graph.insert_edge(Node::Internal(1), Node::Sink, unit(1.0));

    let mut network = FlowNetwork::new(graph);
    let Ok(flow) = network.max_flow() else {
        unreachable!("network with a finite bottleneck must solve");
    };
    assert!((flow - 1.0).abs() < 1e-9, "expected flow 1, got {flow}");

    // Both internal nodes stay on the source side; the cut crosses only the
    // finite sink edge.
    let Ok((source_side, sink_side)) = network.partitions() else {
        unreachable!("solved network must partition");
    };
    assert!(source_side.contains(&Node::Internal(0)));
    assert!(source_side.contains(&Node::Internal(1)));
    assert!(sink_side.is_empty());

    let Ok(cut) = network.cut_value() else {
        unreachable!("solved network must produce a cut");
    };
    assert_eq!(cut, unit(1.0));
}

#[test]
fn test_partitions_cover_internal_nodes_disjointly() {
    let mut graph = WeightedGraph::new();
    graph.insert_node(Node::Source);
    graph.insert_node(Node::Sink);
    for index in 0..6 {
        graph.insert_node(Node::Internal(index));
        graph.insert_edge(Node::Source, Node::Internal(index), unit(1.0));
        graph.insert_edge(Node::Internal(index), Node::Sink, unit(1.0));
    }

    let mut network = FlowNetwork::new(graph);
    let Ok((source_side, sink_side)) = network.partitions() else {
        unreachable!("finite network must partition");
    };

    assert_eq!(source_side.len() + sink_side.len(), 6);
    assert!(source_side.intersection(&sink_side).next().is_none());
    assert!(!source_side.contains(&Node::Source));
    assert!(!sink_side.contains(&Node::Sink));
}

#[test]
fn test_empty_network_partitions_into_empty_sets() {
    let mut network = FlowNetwork::new(WeightedGraph::new());
    let Ok((source_side, sink_side)) = network.partitions() else {
        unreachable!("empty network must partition");
    };
    assert!(source_side.is_empty());
    assert!(sink_side.is_empty());

    let Ok(flow) = network.max_flow() else {
        unreachable!("empty network must solve");
    };
    assert!(flow.abs() < 1e-12);
}

#[test]
fn test_all_barrier_path_reports_unbounded_flow() {
    let mut graph = WeightedGraph::new();
    graph.insert_node(Node::Source);
    graph.insert_node(Node::Sink);
    graph.insert_node(Node::Internal(0));
    graph.insert_edge(Node::Source, Node::Internal(0), Capacity::Barrier(1));
    graph.insert_edge(Node::Internal(0), Node::Sink, Capacity::Barrier(1));

    let mut network = FlowNetwork::new(graph);
    assert_eq!(network.max_flow(), Err(SpellerError::UnboundedFlow));
}

#[test]
fn test_repeated_solves_are_stable() {
    let mut graph = WeightedGraph::new();
    graph.insert_node(Node::Source);
    graph.insert_node(Node::Sink);
    let weights = [(1.0, 1.4), (1.1, 1.3), (1.2, 1.2), (1.3, 1.1)];
    for (index, (inbound, outbound)) in weights.into_iter().enumerate() {
        graph.insert_node(Node::Internal(index));
        graph.insert_edge(Node::Source, Node::Internal(index), unit(inbound));
        graph.insert_edge(Node::Internal(index), Node::Sink, unit(outbound));
    }

    let mut network = FlowNetwork::new(graph);
    let Ok(first) = network.partitions() else {
        unreachable!("finite network must partition");
    };
    let Ok(second) = network.partitions() else {
        unreachable!("finite network must partition");
    };
    assert_eq!(first, second);
}

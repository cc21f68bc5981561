//! Integration tests for tielink-graph
//!
//! These tests check structural invariants over arbitrary edge tables.

use proptest::prelude::*;
use std::collections::HashSet;
use tielink_domain::{Edge, NodeId, Topology};
use tielink_graph::{Graph, GraphSummary, MissingEdgePolicy};

fn n(v: u64) -> NodeId {
    NodeId::new(v)
}

fn edge_table() -> impl Strategy<Value = Vec<(u64, u64)>> {
    prop::collection::vec((0u64..30, 0u64..30), 0..120)
}

fn build(pairs: &[(u64, u64)]) -> Graph {
    Graph::from_edges(pairs.iter().map(|&(u, v)| (n(u), n(v))))
}

#[test]
fn test_graph_usable_through_topology_trait() {
    fn degree_sum<T: Topology>(topology: &T, nodes: &[NodeId]) -> usize
    where
        T::Error: std::fmt::Debug,
    {
        nodes.iter().map(|&node| topology.degree(node).unwrap()).sum()
    }

    let graph = build(&[(1, 2), (2, 3), (3, 4)]);
    assert_eq!(degree_sum(&graph, graph.nodes()), 6);
    assert!(Topology::are_adjacent(&graph, n(2), n(3)).unwrap());
}

#[test]
fn test_summary_serializes() {
    let graph = build(&[(1, 2), (2, 3)]);
    let json = serde_json::to_value(GraphSummary::of(&graph)).unwrap();
    assert_eq!(json["nodes"], 3);
    assert_eq!(json["edges"], 2);
}

proptest! {
    /// Property: simplified graphs have no self-loops or duplicate edges
    #[test]
    fn test_simplified_edges_are_unique(pairs in edge_table()) {
        let graph = build(&pairs);
        let unique: HashSet<Edge> = graph.edges().iter().copied().collect();

        prop_assert_eq!(unique.len(), graph.edge_count());
        prop_assert!(graph.edges().iter().all(|edge| !edge.is_self_loop()));
        prop_assert_eq!(
            graph.edge_count() + graph.simplify_report().self_loops
                + graph.simplify_report().duplicate_edges,
            pairs.len()
        );
    }

    /// Property: degree sum equals twice the edge count (handshake lemma)
    #[test]
    fn test_handshake(pairs in edge_table()) {
        let graph = build(&pairs);
        let total: usize = graph.degrees().map(|(_, degree)| degree).sum();
        prop_assert_eq!(total, 2 * graph.edge_count());
    }

    /// Property: adjacency agrees with the edge list in both orientations
    #[test]
    fn test_adjacency_matches_edges(pairs in edge_table()) {
        let graph = build(&pairs);
        for edge in graph.edges() {
            let (u, v) = edge.endpoints();
            prop_assert!(graph.are_adjacent(u, v).unwrap());
            prop_assert!(graph.are_adjacent(v, u).unwrap());
        }
    }

    /// Property: removing a subset leaves exactly the complement
    #[test]
    fn test_remove_edges_complement(pairs in edge_table(), stride in 1usize..5) {
        let graph = build(&pairs);
        let removed: Vec<Edge> = graph.edges().iter().copied().step_by(stride).collect();
        let derived = graph.remove_edges(&removed, MissingEdgePolicy::Fail).unwrap();

        prop_assert_eq!(derived.edge_count(), graph.edge_count() - removed.len());
        prop_assert_eq!(derived.node_count(), graph.node_count());
        for edge in &removed {
            let (u, v) = edge.endpoints();
            prop_assert!(!derived.are_adjacent(u, v).unwrap());
            prop_assert!(graph.are_adjacent(u, v).unwrap());
        }
    }
}

//! Descriptive statistics of a graph

use crate::Graph;
use serde::Serialize;
use std::collections::BTreeMap;

/// Size and degree statistics of a graph
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphSummary {
    /// Number of nodes
    pub nodes: usize,

    /// Number of edges
    pub edges: usize,

    /// Fraction of possible edges present, 0 for graphs with fewer than two nodes
    pub density: f64,

    /// Smallest degree (0 for an empty graph)
    pub min_degree: usize,

    /// Largest degree (0 for an empty graph)
    pub max_degree: usize,

    /// Mean degree (0 for an empty graph)
    pub mean_degree: f64,

    /// Nodes with no edges
    pub isolated_nodes: usize,

    /// Number of nodes per degree value
    pub degree_histogram: BTreeMap<usize, usize>,
}

impl GraphSummary {
    /// Compute the summary of a graph
    ///
    /// # Examples
    ///
    /// ```
    /// use tielink_domain::NodeId;
    /// use tielink_graph::{Graph, GraphSummary};
    ///
    /// let n = NodeId::new;
    /// let graph = Graph::from_edges([(n(1), n(2)), (n(2), n(3))]);
    /// let summary = GraphSummary::of(&graph);
    /// assert_eq!(summary.max_degree, 2);
    /// assert_eq!(summary.degree_histogram.get(&1), Some(&2));
    /// ```
    pub fn of(graph: &Graph) -> Self {
        let nodes = graph.node_count();
        let edges = graph.edge_count();

        let mut degree_histogram = BTreeMap::new();
        let mut total_degree = 0usize;
        for (_, degree) in graph.degrees() {
            *degree_histogram.entry(degree).or_insert(0) += 1;
            total_degree += degree;
        }

        let density = if nodes < 2 {
            0.0
        } else {
            (2 * edges) as f64 / (nodes * (nodes - 1)) as f64
        };
        let mean_degree = if nodes == 0 {
            0.0
        } else {
            total_degree as f64 / nodes as f64
        };

        Self {
            nodes,
            edges,
            density,
            min_degree: degree_histogram.keys().next().copied().unwrap_or(0),
            max_degree: degree_histogram.keys().next_back().copied().unwrap_or(0),
            mean_degree,
            isolated_nodes: degree_histogram.get(&0).copied().unwrap_or(0),
            degree_histogram,
        }
    }

    /// Generate a summary report
    pub fn summary(&self) -> String {
        let lines = vec![
            "Graph Summary".to_string(),
            "=============".to_string(),
            format!("Nodes: {}", self.nodes),
            format!("Edges: {}", self.edges),
            format!("Density: {:.6}", self.density),
            format!(
                "Degree: min {}, max {}, mean {:.2}",
                self.min_degree, self.max_degree, self.mean_degree
            ),
            format!("Isolated nodes: {}", self.isolated_nodes),
        ];
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tielink_domain::NodeId;

    fn n(v: u64) -> NodeId {
        NodeId::new(v)
    }

    #[test]
    fn test_empty_graph() {
        let summary = GraphSummary::of(&Graph::from_edges(std::iter::empty()));
        assert_eq!(summary.nodes, 0);
        assert_eq!(summary.density, 0.0);
        assert_eq!(summary.mean_degree, 0.0);
        assert_eq!(summary.max_degree, 0);
    }

    #[test]
    fn test_complete_graph_density() {
        let graph = Graph::from_edges([(n(1), n(2)), (n(2), n(3)), (n(1), n(3))]);
        let summary = GraphSummary::of(&graph);
        assert_eq!(summary.density, 1.0);
        assert_eq!(summary.mean_degree, 2.0);
        assert_eq!(summary.isolated_nodes, 0);
    }

    #[test]
    fn test_isolated_nodes_counted() {
        let graph = Graph::from_tables([n(1), n(2), n(3), n(4)], [(n(1), n(2))]).unwrap();
        let summary = GraphSummary::of(&graph);
        assert_eq!(summary.isolated_nodes, 2);
        assert_eq!(summary.min_degree, 0);
        assert_eq!(summary.degree_histogram.get(&1), Some(&2));

        let report = summary.summary();
        assert!(report.contains("Nodes: 4"));
        assert!(report.contains("Isolated nodes: 2"));
    }
}

//! Simplified undirected graph

use crate::GraphError;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use tielink_domain::{Edge, NodeId, Topology};

/// What `remove_edges` does with an edge that is not in the graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingEdgePolicy {
    /// Fail with `GraphError::EdgeNotFound`
    #[default]
    Fail,

    /// Skip the edge silently
    Ignore,
}

/// Counts of input records dropped by simplification
///
/// Diagnostic only; nothing downstream depends on these numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SimplifyReport {
    /// Edges whose endpoints were the same node
    pub self_loops: usize,

    /// Edges already present in either orientation
    pub duplicate_edges: usize,

    /// Repeated identifiers in the node table
    pub duplicate_nodes: usize,
}

impl SimplifyReport {
    /// Total number of dropped records
    pub fn total_dropped(&self) -> usize {
        self.self_loops + self.duplicate_edges + self.duplicate_nodes
    }
}

/// Immutable, simple, undirected graph
///
/// Built once from node/edge tables. Every neighbor list is sorted, so
/// adjacency tests are binary searches and neighborhood intersections are
/// linear merges.
#[derive(Debug, Clone)]
pub struct Graph {
    nodes: Vec<NodeId>,
    index: HashMap<NodeId, usize>,
    adjacency: Vec<Vec<NodeId>>,
    edges: Vec<Edge>,
    report: SimplifyReport,
}

impl Graph {
    /// Build a graph from a node table and an edge table
    ///
    /// Every edge endpoint must appear in the node table. Nodes without
    /// edges are kept as isolated nodes.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::UnknownNode` for an edge endpoint missing from
    /// the node table.
    pub fn from_tables<N, E>(nodes: N, edges: E) -> Result<Self, GraphError>
    where
        N: IntoIterator<Item = NodeId>,
        E: IntoIterator<Item = (NodeId, NodeId)>,
    {
        let mut report = SimplifyReport::default();
        let mut node_list = Vec::new();
        let mut index = HashMap::new();

        for node in nodes {
            match index.entry(node) {
                Entry::Occupied(_) => report.duplicate_nodes += 1,
                Entry::Vacant(slot) => {
                    slot.insert(node_list.len());
                    node_list.push(node);
                }
            }
        }

        let mut seen = HashSet::new();
        let mut kept = Vec::new();
        for (u, v) in edges {
            for endpoint in [u, v] {
                if !index.contains_key(&endpoint) {
                    return Err(GraphError::UnknownNode(endpoint));
                }
            }
            let edge = Edge::new(u, v);
            if admit(edge, &mut seen, &mut report) {
                kept.push(edge);
            }
        }

        Ok(Self::assemble(node_list, index, kept, report))
    }

    /// Build a graph from an edge table alone
    ///
    /// The node set is every endpoint, in first-seen order.
    pub fn from_edges<E>(edges: E) -> Self
    where
        E: IntoIterator<Item = (NodeId, NodeId)>,
    {
        let mut report = SimplifyReport::default();
        let mut node_list = Vec::new();
        let mut index = HashMap::new();
        let mut seen = HashSet::new();
        let mut kept = Vec::new();

        for (u, v) in edges {
            for endpoint in [u, v] {
                if let Entry::Vacant(slot) = index.entry(endpoint) {
                    slot.insert(node_list.len());
                    node_list.push(endpoint);
                }
            }
            let edge = Edge::new(u, v);
            if admit(edge, &mut seen, &mut report) {
                kept.push(edge);
            }
        }

        Self::assemble(node_list, index, kept, report)
    }

    fn assemble(
        nodes: Vec<NodeId>,
        index: HashMap<NodeId, usize>,
        edges: Vec<Edge>,
        report: SimplifyReport,
    ) -> Self {
        let mut adjacency = vec![Vec::new(); nodes.len()];
        for edge in &edges {
            let (u, v) = edge.endpoints();
            adjacency[index[&u]].push(v);
            adjacency[index[&v]].push(u);
        }
        for neighbors in &mut adjacency {
            neighbors.sort_unstable();
        }

        Self {
            nodes,
            index,
            adjacency,
            edges,
            report,
        }
    }

    /// Derive a new graph with the given edges absent
    ///
    /// The node set is unchanged. `self` is left untouched, so callers can
    /// hold the original and the derived graph side by side.
    ///
    /// # Errors
    ///
    /// - `GraphError::UnknownNode` if an endpoint is not in the graph
    /// - `GraphError::EdgeNotFound` if an edge is missing and the policy is
    ///   `MissingEdgePolicy::Fail`
    pub fn remove_edges(
        &self,
        edges: &[Edge],
        policy: MissingEdgePolicy,
    ) -> Result<Graph, GraphError> {
        let mut removal = HashSet::with_capacity(edges.len());

        for edge in edges {
            let (u, v) = edge.endpoints();
            if self.are_adjacent(u, v)? {
                removal.insert(*edge);
            } else if policy == MissingEdgePolicy::Fail {
                return Err(GraphError::EdgeNotFound(u, v));
            } else {
                tracing::debug!("Skipping removal of missing edge {}", edge);
            }
        }

        let kept: Vec<Edge> = self
            .edges
            .iter()
            .copied()
            .filter(|edge| !removal.contains(edge))
            .collect();

        tracing::debug!(
            "Derived graph: {} edges removed, {} remaining",
            removal.len(),
            kept.len()
        );

        Ok(Self::assemble(
            self.nodes.clone(),
            self.index.clone(),
            kept,
            self.report,
        ))
    }

    /// Nodes in table order
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Edges in first-seen order, canonical orientation
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// What simplification dropped at construction time
    pub fn simplify_report(&self) -> SimplifyReport {
        self.report
    }

    /// Whether the node is part of the graph
    pub fn contains_node(&self, node: NodeId) -> bool {
        self.index.contains_key(&node)
    }

    /// Neighbors of a node, sorted ascending
    pub fn neighbors(&self, node: NodeId) -> Result<&[NodeId], GraphError> {
        self.index
            .get(&node)
            .map(|&slot| self.adjacency[slot].as_slice())
            .ok_or(GraphError::UnknownNode(node))
    }

    /// Number of neighbors of a node
    pub fn degree(&self, node: NodeId) -> Result<usize, GraphError> {
        self.neighbors(node).map(<[NodeId]>::len)
    }

    /// Whether two nodes share an edge
    ///
    /// Binary search over the shorter of the two neighbor lists.
    pub fn are_adjacent(&self, u: NodeId, v: NodeId) -> Result<bool, GraphError> {
        let neighbors_u = self.neighbors(u)?;
        let neighbors_v = self.neighbors(v)?;

        let found = if neighbors_u.len() <= neighbors_v.len() {
            neighbors_u.binary_search(&v).is_ok()
        } else {
            neighbors_v.binary_search(&u).is_ok()
        };
        Ok(found)
    }

    /// Every node with its degree, in table order
    pub fn degrees(&self) -> impl Iterator<Item = (NodeId, usize)> + '_ {
        self.nodes
            .iter()
            .zip(&self.adjacency)
            .map(|(&node, neighbors)| (node, neighbors.len()))
    }
}

/// Record `edge` unless simplification drops it
fn admit(edge: Edge, seen: &mut HashSet<Edge>, report: &mut SimplifyReport) -> bool {
    if edge.is_self_loop() {
        report.self_loops += 1;
        return false;
    }
    if !seen.insert(edge) {
        report.duplicate_edges += 1;
        return false;
    }
    true
}

impl Topology for Graph {
    type Error = GraphError;

    fn contains_node(&self, node: NodeId) -> bool {
        Graph::contains_node(self, node)
    }

    fn neighbors(&self, node: NodeId) -> Result<&[NodeId], Self::Error> {
        Graph::neighbors(self, node)
    }

    fn degree(&self, node: NodeId) -> Result<usize, Self::Error> {
        Graph::degree(self, node)
    }

    fn are_adjacent(&self, u: NodeId, v: NodeId) -> Result<bool, Self::Error> {
        Graph::are_adjacent(self, u, v)
    }
}

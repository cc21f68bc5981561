//! Per-batch memo of neighbor lists and degrees

use crate::HeuristicError;
use std::collections::HashMap;
use std::fmt::Display;
use thiserror::Error;
use tielink_domain::{CandidateEdge, NodeId, Topology};

/// Lookup of a node the batch never touched
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("node {0} is outside the cached batch")]
pub struct CacheMiss(pub NodeId);

/// Read-only snapshot of everything a batch of candidates needs
///
/// Holds the neighbor list of every candidate endpoint and the degree of
/// every endpoint and every neighbor of an endpoint. Built once before
/// scoring; afterwards it is shared across worker threads without locks.
#[derive(Debug, Clone)]
pub struct CachedTopology<'g> {
    neighbors: HashMap<NodeId, &'g [NodeId]>,
    degrees: HashMap<NodeId, usize>,
}

impl<'g> CachedTopology<'g> {
    /// Snapshot the part of `graph` reachable from the candidates
    ///
    /// # Errors
    ///
    /// Returns `HeuristicError::UnknownNode` for the first candidate
    /// endpoint missing from `graph`.
    pub fn build<G>(graph: &'g G, candidates: &[CandidateEdge]) -> Result<Self, HeuristicError>
    where
        G: Topology,
        G::Error: Display,
    {
        let mut neighbors = HashMap::new();
        let mut degrees = HashMap::new();

        for candidate in candidates {
            for endpoint in [candidate.from, candidate.to] {
                if neighbors.contains_key(&endpoint) {
                    continue;
                }
                if !graph.contains_node(endpoint) {
                    return Err(HeuristicError::UnknownNode(endpoint));
                }

                let list = graph
                    .neighbors(endpoint)
                    .map_err(|e| HeuristicError::Topology(e.to_string()))?;
                neighbors.insert(endpoint, list);
                degrees.insert(endpoint, list.len());

                for &w in list {
                    if !degrees.contains_key(&w) {
                        let degree = graph
                            .degree(w)
                            .map_err(|e| HeuristicError::Topology(e.to_string()))?;
                        degrees.insert(w, degree);
                    }
                }
            }
        }

        tracing::debug!(
            "Cached {} neighbor lists and {} degrees for {} candidates",
            neighbors.len(),
            degrees.len(),
            candidates.len()
        );

        Ok(Self { neighbors, degrees })
    }

    /// Number of cached neighbor lists
    pub fn endpoint_count(&self) -> usize {
        self.neighbors.len()
    }
}

impl Topology for CachedTopology<'_> {
    type Error = CacheMiss;

    fn contains_node(&self, node: NodeId) -> bool {
        self.degrees.contains_key(&node)
    }

    fn neighbors(&self, node: NodeId) -> Result<&[NodeId], Self::Error> {
        self.neighbors.get(&node).copied().ok_or(CacheMiss(node))
    }

    fn degree(&self, node: NodeId) -> Result<usize, Self::Error> {
        self.degrees.get(&node).copied().ok_or(CacheMiss(node))
    }

    fn are_adjacent(&self, u: NodeId, v: NodeId) -> Result<bool, Self::Error> {
        match (self.neighbors.get(&u), self.neighbors.get(&v)) {
            (Some(list), _) => Ok(list.binary_search(&v).is_ok()),
            (None, Some(list)) => Ok(list.binary_search(&u).is_ok()),
            (None, None) => Err(CacheMiss(u)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tielink_graph::Graph;

    fn n(v: u64) -> NodeId {
        NodeId::new(v)
    }

    #[test]
    fn test_cache_covers_endpoints_and_their_neighbors() {
        // Path 1-2-3-4-5
        let graph = Graph::from_edges((1..5).map(|i| (n(i), n(i + 1))));
        let cache = CachedTopology::build(&graph, &[CandidateEdge::negative(n(1), n(3))]).unwrap();

        assert_eq!(cache.endpoint_count(), 2);
        assert_eq!(cache.neighbors(n(3)).unwrap(), &[n(2), n(4)]);
        assert_eq!(cache.degree(n(4)).unwrap(), 2);
        assert!(cache.are_adjacent(n(4), n(3)).unwrap());
        assert_eq!(cache.neighbors(n(4)), Err(CacheMiss(n(4))));
        assert_eq!(cache.degree(n(5)), Err(CacheMiss(n(5))));
    }

    #[test]
    fn test_cache_rejects_unknown_endpoint() {
        let graph = Graph::from_edges([(n(1), n(2))]);
        let result = CachedTopology::build(&graph, &[CandidateEdge::negative(n(1), n(9))]);
        assert_eq!(result.unwrap_err(), HeuristicError::UnknownNode(n(9)));
    }
}

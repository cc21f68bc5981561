//! Edges and labeled candidate pairs
//!
//! Ties are undirected: `(u, v)` and `(v, u)` name the same edge. `Edge`
//! always stores the smaller identifier first so it can be used directly as
//! a set or map key.

use crate::NodeId;
use std::fmt;

/// Canonical undirected node pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    low: NodeId,
    high: NodeId,
}

impl Edge {
    /// Create an edge, normalizing the orientation
    ///
    /// # Examples
    ///
    /// ```
    /// use tielink_domain::{Edge, NodeId};
    ///
    /// let a = Edge::new(NodeId::new(5), NodeId::new(2));
    /// let b = Edge::new(NodeId::new(2), NodeId::new(5));
    /// assert_eq!(a, b);
    /// assert_eq!(a.low(), NodeId::new(2));
    /// ```
    pub fn new(u: NodeId, v: NodeId) -> Self {
        if u <= v {
            Self { low: u, high: v }
        } else {
            Self { low: v, high: u }
        }
    }

    /// Smaller endpoint
    pub fn low(&self) -> NodeId {
        self.low
    }

    /// Larger endpoint
    pub fn high(&self) -> NodeId {
        self.high
    }

    /// Both endpoints, smaller first
    pub fn endpoints(&self) -> (NodeId, NodeId) {
        (self.low, self.high)
    }

    /// Whether both endpoints are the same node
    pub fn is_self_loop(&self) -> bool {
        self.low == self.high
    }
}

impl From<(NodeId, NodeId)> for Edge {
    fn from((u, v): (NodeId, NodeId)) -> Self {
        Self::new(u, v)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

/// Class of a candidate pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeLabel {
    /// Sampled pair that is not a tie in the original graph (label 0)
    Negative,

    /// Real tie that was removed from the graph (label 1)
    Positive,
}

impl EdgeLabel {
    /// Numeric class value (0 or 1)
    pub fn as_u8(&self) -> u8 {
        match self {
            EdgeLabel::Negative => 0,
            EdgeLabel::Positive => 1,
        }
    }

    /// Parse a numeric class value
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(EdgeLabel::Negative),
            1 => Some(EdgeLabel::Positive),
            _ => None,
        }
    }
}

/// A labeled pair of nodes whose tie is to be predicted
///
/// `from` and `to` keep the orientation in which the pair was drawn; use
/// [`CandidateEdge::edge`] for orientation-free comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CandidateEdge {
    /// First endpoint as drawn
    pub from: NodeId,

    /// Second endpoint as drawn
    pub to: NodeId,

    /// Class of the pair
    pub label: EdgeLabel,
}

impl CandidateEdge {
    /// Create a candidate pair
    pub fn new(from: NodeId, to: NodeId, label: EdgeLabel) -> Self {
        Self { from, to, label }
    }

    /// Positive candidate for a removed tie
    pub fn positive(edge: Edge) -> Self {
        Self::new(edge.low(), edge.high(), EdgeLabel::Positive)
    }

    /// Negative candidate for a sampled non-tie
    pub fn negative(from: NodeId, to: NodeId) -> Self {
        Self::new(from, to, EdgeLabel::Negative)
    }

    /// Orientation-free key of this pair
    pub fn edge(&self) -> Edge {
        Edge::new(self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(v: u64) -> NodeId {
        NodeId::new(v)
    }

    #[test]
    fn test_edge_canonical_orientation() {
        let edge = Edge::new(n(9), n(3));
        assert_eq!(edge.endpoints(), (n(3), n(9)));
        assert_eq!(edge.to_string(), "3-9");
    }

    #[test]
    fn test_self_loop() {
        assert!(Edge::new(n(4), n(4)).is_self_loop());
        assert!(!Edge::new(n(4), n(5)).is_self_loop());
    }

    #[test]
    fn test_label_values() {
        assert_eq!(EdgeLabel::Positive.as_u8(), 1);
        assert_eq!(EdgeLabel::Negative.as_u8(), 0);
        assert_eq!(EdgeLabel::from_u8(1), Some(EdgeLabel::Positive));
        assert_eq!(EdgeLabel::from_u8(2), None);
    }

    #[test]
    fn test_candidate_edge_key_ignores_orientation() {
        let a = CandidateEdge::negative(n(8), n(1));
        let b = CandidateEdge::negative(n(1), n(8));
        assert_ne!(a, b);
        assert_eq!(a.edge(), b.edge());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: an edge is the same value regardless of orientation
        #[test]
        fn test_edge_symmetry(u: u64, v: u64) {
            let forward = Edge::new(NodeId::new(u), NodeId::new(v));
            let backward = Edge::new(NodeId::new(v), NodeId::new(u));

            prop_assert_eq!(forward, backward);
            prop_assert!(forward.low() <= forward.high());
        }
    }
}

//! Link-prediction metrics
//!
//! Each metric is a pure function of a topology and a node pair. Neighbor
//! lists are sorted, so shared neighbors are found with a linear merge in
//! O(d(u) + d(v)).

use crate::{DegenerateDegreePolicy, HeuristicError};
use std::cmp::Ordering;
use std::fmt::Display;
use tielink_domain::{HeuristicVector, NodeId, Topology};

/// Neighbors of `node`, mapping a missing node to `UnknownNode`
fn neighbors_of<G>(graph: &G, node: NodeId) -> Result<&[NodeId], HeuristicError>
where
    G: Topology,
    G::Error: Display,
{
    if !graph.contains_node(node) {
        return Err(HeuristicError::UnknownNode(node));
    }
    graph
        .neighbors(node)
        .map_err(|e| HeuristicError::Topology(e.to_string()))
}

fn degree_of<G>(graph: &G, node: NodeId) -> Result<usize, HeuristicError>
where
    G: Topology,
    G::Error: Display,
{
    if !graph.contains_node(node) {
        return Err(HeuristicError::UnknownNode(node));
    }
    graph
        .degree(node)
        .map_err(|e| HeuristicError::Topology(e.to_string()))
}

/// Nodes present in both sorted slices
struct SharedNeighbors<'a> {
    left: &'a [NodeId],
    right: &'a [NodeId],
}

impl Iterator for SharedNeighbors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        while let (Some(&a), Some(&b)) = (self.left.first(), self.right.first()) {
            match a.cmp(&b) {
                Ordering::Equal => {
                    self.left = &self.left[1..];
                    self.right = &self.right[1..];
                    return Some(a);
                }
                Ordering::Less => self.left = &self.left[1..],
                Ordering::Greater => self.right = &self.right[1..],
            }
        }
        None
    }
}

fn shared<'a>(left: &'a [NodeId], right: &'a [NodeId]) -> SharedNeighbors<'a> {
    SharedNeighbors { left, right }
}

/// `|N(u) ∩ N(v)|`
pub fn common_neighbors<G>(graph: &G, u: NodeId, v: NodeId) -> Result<u64, HeuristicError>
where
    G: Topology,
    G::Error: Display,
{
    let neighbors_u = neighbors_of(graph, u)?;
    let neighbors_v = neighbors_of(graph, v)?;
    Ok(shared(neighbors_u, neighbors_v).count() as u64)
}

/// `|N(u) ∩ N(v)| / |N(u) ∪ N(v)|`, or 0 when both neighborhoods are empty
pub fn jaccard<G>(graph: &G, u: NodeId, v: NodeId) -> Result<f64, HeuristicError>
where
    G: Topology,
    G::Error: Display,
{
    let neighbors_u = neighbors_of(graph, u)?;
    let neighbors_v = neighbors_of(graph, v)?;

    let intersection = shared(neighbors_u, neighbors_v).count();
    let union = neighbors_u.len() + neighbors_v.len() - intersection;
    if union == 0 {
        return Ok(0.0);
    }
    Ok(intersection as f64 / union as f64)
}

/// `Σ 1 / ln d(w)` over shared neighbors `w`
///
/// # Errors
///
/// Returns `HeuristicError::DegenerateDegree` for a degree-1 shared neighbor
/// when the policy is `DegenerateDegreePolicy::Fail`.
pub fn adamic_adar<G>(
    graph: &G,
    u: NodeId,
    v: NodeId,
    policy: DegenerateDegreePolicy,
) -> Result<f64, HeuristicError>
where
    G: Topology,
    G::Error: Display,
{
    let neighbors_u = neighbors_of(graph, u)?;
    let neighbors_v = neighbors_of(graph, v)?;

    let mut score = 0.0;
    for w in shared(neighbors_u, neighbors_v) {
        let degree = degree_of(graph, w)?;
        if degree > 1 {
            score += 1.0 / (degree as f64).ln();
            continue;
        }
        match policy {
            DegenerateDegreePolicy::Exclude => {}
            DegenerateDegreePolicy::Clamp { value } => score += value,
            DegenerateDegreePolicy::Fail => {
                return Err(HeuristicError::DegenerateDegree {
                    node: w,
                    from: u,
                    to: v,
                });
            }
        }
    }
    Ok(score)
}

/// `d(u) · d(v)`
pub fn preferential_attachment<G>(graph: &G, u: NodeId, v: NodeId) -> Result<u64, HeuristicError>
where
    G: Topology,
    G::Error: Display,
{
    let degree_u = degree_of(graph, u)? as u64;
    let degree_v = degree_of(graph, v)? as u64;
    Ok(degree_u * degree_v)
}

/// All four metrics of a pair
pub fn heuristic_vector<G>(
    graph: &G,
    u: NodeId,
    v: NodeId,
    policy: DegenerateDegreePolicy,
) -> Result<HeuristicVector, HeuristicError>
where
    G: Topology,
    G::Error: Display,
{
    Ok(HeuristicVector {
        common_neighbors: common_neighbors(graph, u, v)?,
        jaccard: jaccard(graph, u, v)?,
        adamic_adar: adamic_adar(graph, u, v, policy)?,
        pref_attachment: preferential_attachment(graph, u, v)?,
    })
}

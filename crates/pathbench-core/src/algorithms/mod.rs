//! Shortest-path algorithms
//!
//! - Priority-queue Dijkstra with early exit ([`dijkstra`])
//! - Floyd-Warshall with predecessor-matrix reconstruction ([`floyd_warshall`])
//! - Bellman-Ford over petgraph ([`bellman_ford`])
//! - Reference Dijkstra over petgraph ([`reference`])

pub mod bellman_ford;
pub mod dijkstra;
pub mod floyd_warshall;
pub mod reference;

use crate::graph::{NodeId, WeightedGraph};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Shortest path between one pair of nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathResult {
    /// Nodes from source to target inclusive; `None` when unreachable
    pub path: Option<Vec<NodeId>>,
    /// Sum of edge weights along `path`; infinite when unreachable
    pub cost: f64,
}

impl PathResult {
    /// Result for a pair with no connecting path
    pub fn unreachable() -> Self {
        Self {
            path: None,
            cost: f64::INFINITY,
        }
    }

    /// Whether a path was found
    pub fn is_reachable(&self) -> bool {
        self.path.is_some()
    }
}

/// Single-source shortest path tree
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    /// Root of the tree
    pub source: NodeId,
    /// Distance from source to each node (infinite when unreached)
    pub distances: HashMap<NodeId, f64>,
    /// Predecessor of each reached node other than the source
    pub predecessors: HashMap<NodeId, NodeId>,
}

impl ShortestPathTree {
    /// Distance from the source to `target`
    pub fn distance(&self, target: NodeId) -> Result<f64> {
        self.distances
            .get(&target)
            .copied()
            .ok_or(Error::NodeNotFound(target))
    }

    /// Path from the source to `target`, `None` when unreached
    pub fn path_to(&self, target: NodeId) -> Result<Option<Vec<NodeId>>> {
        let distance = self.distance(target)?;
        if distance.is_infinite() {
            return Ok(None);
        }
        walk_back(self.source, target, self.distances.len(), |node| {
            self.predecessors.get(&node).copied()
        })
        .map(Some)
    }

    /// Path and cost from the source to `target`
    pub fn pair(&self, target: NodeId) -> Result<PathResult> {
        match self.path_to(target)? {
            Some(path) => Ok(PathResult {
                path: Some(path),
                cost: self.distance(target)?,
            }),
            None => Ok(PathResult::unreachable()),
        }
    }
}

/// Fail with [`Error::NegativeWeight`] on the first negative edge
///
/// Scans the whole graph, including components no query can reach.
pub(crate) fn reject_negative_weights(graph: &WeightedGraph, algorithm: &'static str) -> Result<()> {
    match graph.first_negative_edge() {
        Some(edge) => Err(Error::NegativeWeight {
            algorithm,
            from: edge.from,
            to: edge.to,
            weight: edge.effective_weight(),
        }),
        None => Ok(()),
    }
}

/// Follow predecessors from `target` back to `source`
///
/// Returns the path in source-to-target order. The walk may take at most
/// `limit` steps (the node count); running past it, or hitting a node with
/// no predecessor before reaching `source`, means the predecessor state is
/// corrupted.
pub(crate) fn walk_back<T, F>(source: T, target: T, limit: usize, mut predecessor: F) -> Result<Vec<T>>
where
    T: Copy + PartialEq + std::fmt::Debug,
    F: FnMut(T) -> Option<T>,
{
    let mut path = vec![target];
    let mut current = target;
    while current != source {
        if path.len() >= limit {
            return Err(Error::invariant(format!(
                "predecessor walk from {:?} to {:?} exceeded {} steps",
                target, source, limit
            )));
        }
        current = predecessor(current).ok_or_else(|| {
            Error::invariant(format!(
                "predecessor chain from {:?} broke at {:?} before reaching {:?}",
                target, current, source
            ))
        })?;
        path.push(current);
    }
    path.reverse();
    Ok(path)
}

//! Floyd-Warshall all-pairs shortest paths
//!
//! Fills a dense distance matrix and a predecessor matrix where
//! `pred[u][v]` is the node visited just before `v` on the best known path
//! from `u`. Any path is rebuilt by walking that row backwards from `v`.
//!
//! Cost is cubic in the node count, so this is meant for small to medium
//! graphs.

use super::{PathResult, walk_back};
use crate::graph::{NodeId, WeightedGraph};
use crate::{Error, Result};
use std::collections::HashMap;
use tracing::debug;

/// Distance and predecessor matrices over every node pair
#[derive(Debug, Clone)]
pub struct AllPairsShortestPaths {
    nodes: Vec<NodeId>,
    index: HashMap<NodeId, usize>,
    dist: Vec<Vec<f64>>,
    pred: Vec<Vec<Option<usize>>>,
}

/// Compute shortest distances between every pair of nodes
///
/// Negative edge weights are allowed; a negative-weight cycle anywhere in
/// the graph is reported as [`Error::NegativeCycle`].
pub fn floyd_warshall(graph: &WeightedGraph) -> Result<AllPairsShortestPaths> {
    let n = graph.node_count();
    let mut dist = vec![vec![f64::INFINITY; n]; n];
    let mut pred: Vec<Vec<Option<usize>>> = vec![vec![None; n]; n];

    for u in 0..n {
        dist[u][u] = 0.0;
    }

    for u in 0..n {
        for (v, weight) in graph.neighbors_at(u) {
            if weight < dist[u][v] {
                dist[u][v] = weight;
                if u != v {
                    pred[u][v] = Some(u);
                }
            }
        }
    }

    for k in 0..n {
        for u in 0..n {
            let through_k = dist[u][k];
            if through_k.is_infinite() {
                continue;
            }
            for v in 0..n {
                let candidate = through_k + dist[k][v];
                if candidate < dist[u][v] {
                    dist[u][v] = candidate;
                    pred[u][v] = pred[k][v];
                }
            }
        }
    }

    if let Some(u) = (0..n).find(|&u| dist[u][u] < 0.0) {
        debug!(node = graph.node_at(u), "negative cycle through node");
        return Err(Error::NegativeCycle);
    }

    Ok(AllPairsShortestPaths {
        nodes: graph.nodes().to_vec(),
        index: graph
            .nodes()
            .iter()
            .enumerate()
            .map(|(idx, &node)| (node, idx))
            .collect(),
        dist,
        pred,
    })
}

impl AllPairsShortestPaths {
    /// Nodes in matrix order
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Distance matrix in [`nodes`](Self::nodes) order
    pub fn distances(&self) -> &[Vec<f64>] {
        &self.dist
    }

    fn position(&self, node: NodeId) -> Result<usize> {
        self.index
            .get(&node)
            .copied()
            .ok_or(Error::NodeNotFound(node))
    }

    /// Shortest distance from `u` to `v`, infinite when unreachable
    pub fn distance(&self, u: NodeId, v: NodeId) -> Result<f64> {
        Ok(self.dist[self.position(u)?][self.position(v)?])
    }

    /// Node visited just before `v` on the shortest path from `u`
    pub fn predecessor(&self, u: NodeId, v: NodeId) -> Result<Option<NodeId>> {
        let row = &self.pred[self.position(u)?];
        Ok(row[self.position(v)?].map(|idx| self.nodes[idx]))
    }

    /// Rebuild the shortest path from `u` to `v`
    ///
    /// `None` when `v` is unreachable from `u`. A predecessor walk that does
    /// not arrive at `u` within |V| steps is an
    /// [`Error::InvariantViolation`].
    pub fn path(&self, u: NodeId, v: NodeId) -> Result<Option<Vec<NodeId>>> {
        let from = self.position(u)?;
        let to = self.position(v)?;
        if from == to {
            return Ok(Some(vec![u]));
        }
        if self.pred[from][to].is_none() {
            return Ok(None);
        }

        let row = &self.pred[from];
        let path = walk_back(from, to, self.nodes.len(), |idx| row[idx])?;
        Ok(Some(path.into_iter().map(|idx| self.nodes[idx]).collect()))
    }

    /// Path and cost for one pair
    pub fn pair(&self, u: NodeId, v: NodeId) -> Result<PathResult> {
        match self.path(u, v)? {
            Some(path) => Ok(PathResult {
                path: Some(path),
                cost: self.distance(u, v)?,
            }),
            None => Ok(PathResult::unreachable()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond_with_tail() -> WeightedGraph {
        WeightedGraph::build(
            [0, 1, 2, 3],
            [
                (0, 1, Some(1.0)),
                (1, 2, Some(2.0)),
                (0, 2, Some(5.0)),
                (2, 3, Some(1.0)),
            ],
            true,
        )
        .unwrap()
    }

    #[test]
    fn test_floyd_warshall_distances() {
        let apsp = floyd_warshall(&diamond_with_tail()).unwrap();
        assert_eq!(apsp.distance(0, 3).unwrap(), 4.0);
        assert_eq!(apsp.distance(0, 2).unwrap(), 3.0);
        assert_eq!(apsp.distance(1, 3).unwrap(), 3.0);
        assert!(apsp.distance(3, 0).unwrap().is_infinite());
        for &node in apsp.nodes() {
            assert_eq!(apsp.distance(node, node).unwrap(), 0.0);
        }
    }

    #[test]
    fn test_floyd_warshall_reconstruction() {
        let apsp = floyd_warshall(&diamond_with_tail()).unwrap();
        assert_eq!(apsp.path(0, 3).unwrap(), Some(vec![0, 1, 2, 3]));
        assert_eq!(apsp.path(1, 3).unwrap(), Some(vec![1, 2, 3]));
        assert_eq!(apsp.path(2, 2).unwrap(), Some(vec![2]));
        assert_eq!(apsp.path(3, 0).unwrap(), None);
        assert_eq!(apsp.predecessor(0, 3).unwrap(), Some(2));
        assert_eq!(apsp.predecessor(0, 2).unwrap(), Some(1));
    }

    #[test]
    fn test_floyd_warshall_pair() {
        let apsp = floyd_warshall(&diamond_with_tail()).unwrap();
        let found = apsp.pair(0, 3).unwrap();
        assert_eq!(found.path, Some(vec![0, 1, 2, 3]));
        assert_eq!(found.cost, 4.0);
        assert_eq!(apsp.pair(3, 1).unwrap(), PathResult::unreachable());
    }

    #[test]
    fn test_floyd_warshall_undirected_is_symmetric() {
        let graph = WeightedGraph::build(
            [],
            [(0, 1, Some(2.0)), (1, 2, Some(3.0)), (0, 2, Some(9.0))],
            false,
        )
        .unwrap();
        let apsp = floyd_warshall(&graph).unwrap();
        assert_eq!(apsp.distance(0, 2).unwrap(), 5.0);
        assert_eq!(apsp.distance(2, 0).unwrap(), 5.0);
        assert_eq!(apsp.path(2, 0).unwrap(), Some(vec![2, 1, 0]));
    }

    #[test]
    fn test_floyd_warshall_negative_edge_without_cycle() {
        let graph = WeightedGraph::build(
            [],
            [(0, 1, Some(4.0)), (0, 2, Some(5.0)), (2, 1, Some(-3.0))],
            true,
        )
        .unwrap();
        let apsp = floyd_warshall(&graph).unwrap();
        assert_eq!(apsp.distance(0, 1).unwrap(), 2.0);
        assert_eq!(apsp.path(0, 1).unwrap(), Some(vec![0, 2, 1]));
    }

    #[test]
    fn test_floyd_warshall_negative_cycle() {
        let graph = WeightedGraph::build(
            [],
            [(0, 1, Some(1.0)), (1, 2, Some(-2.0)), (2, 0, Some(-1.0))],
            true,
        )
        .unwrap();
        assert!(matches!(floyd_warshall(&graph), Err(Error::NegativeCycle)));
    }

    #[test]
    fn test_floyd_warshall_self_loop_ignored() {
        let graph = WeightedGraph::build([], [(0, 0, Some(3.0)), (0, 1, Some(1.0))], true).unwrap();
        let apsp = floyd_warshall(&graph).unwrap();
        assert_eq!(apsp.distance(0, 0).unwrap(), 0.0);
        assert_eq!(apsp.path(0, 0).unwrap(), Some(vec![0]));
        assert_eq!(apsp.predecessor(0, 0).unwrap(), None);
    }

    #[test]
    fn test_corrupted_predecessors_are_an_invariant_violation() {
        let mut apsp = floyd_warshall(&diamond_with_tail()).unwrap();
        // Make 1 and 2 point at each other in row 0
        apsp.pred[0][1] = Some(2);
        apsp.pred[0][2] = Some(1);
        let err = apsp.path(0, 3).unwrap_err();
        assert!(err.is_internal());
    }

    #[test]
    fn test_empty_graph() {
        let apsp = floyd_warshall(&WeightedGraph::directed()).unwrap();
        assert!(apsp.nodes().is_empty());
        assert!(matches!(apsp.path(0, 0), Err(Error::NodeNotFound(0))));
    }
}

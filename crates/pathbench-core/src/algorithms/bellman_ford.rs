//! Bellman-Ford adapter over petgraph
//!
//! Accepts negative edge weights. A negative cycle reachable from the
//! source is reported as [`Error::NegativeCycle`].

use super::{PathResult, ShortestPathTree};
use crate::graph::{NodeId, WeightedGraph};
use crate::{Error, Result};
use petgraph::algo::bellman_ford as petgraph_bellman_ford;
use petgraph::graph::{DiGraph, NodeIndex};

/// Shortest path tree rooted at `source`
pub fn bellman_ford(graph: &WeightedGraph, source: NodeId) -> Result<ShortestPathTree> {
    bellman_ford_on(graph, &graph.to_petgraph(), source)
}

/// Shortest path from `source` to `target`, extracted from the full tree
pub fn bellman_ford_pair(graph: &WeightedGraph, source: NodeId, target: NodeId) -> Result<PathResult> {
    graph.require_index(target)?;
    bellman_ford(graph, source)?.pair(target)
}

/// Run over a petgraph view built by [`WeightedGraph::to_petgraph`]
pub(crate) fn bellman_ford_on(
    graph: &WeightedGraph,
    view: &DiGraph<NodeId, f64>,
    source: NodeId,
) -> Result<ShortestPathTree> {
    let s = graph.require_index(source)?;
    let paths = petgraph_bellman_ford(view, NodeIndex::new(s)).map_err(|_| Error::NegativeCycle)?;

    Ok(ShortestPathTree {
        source,
        distances: paths
            .distances
            .iter()
            .enumerate()
            .map(|(idx, &distance)| (graph.node_at(idx), distance))
            .collect(),
        predecessors: paths
            .predecessors
            .iter()
            .enumerate()
            .filter_map(|(idx, pred)| {
                pred.map(|p| (graph.node_at(idx), graph.node_at(p.index())))
            })
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bellman_ford() {
        let graph = WeightedGraph::build(
            [1, 2, 3],
            [(1, 2, Some(1.0)), (2, 3, Some(2.0)), (1, 3, Some(4.0))],
            true,
        )
        .unwrap();

        let tree = bellman_ford(&graph, 1).unwrap();
        assert_eq!(tree.distance(3).unwrap(), 3.0);
        assert_eq!(tree.path_to(3).unwrap(), Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_bellman_ford_negative_edge() {
        let graph = WeightedGraph::build(
            [],
            [(0, 1, Some(4.0)), (0, 2, Some(5.0)), (2, 1, Some(-3.0))],
            true,
        )
        .unwrap();

        let result = bellman_ford_pair(&graph, 0, 1).unwrap();
        assert_eq!(result.path, Some(vec![0, 2, 1]));
        assert_eq!(result.cost, 2.0);
    }

    #[test]
    fn test_bellman_ford_negative_cycle() {
        let graph = WeightedGraph::build(
            [],
            [(0, 1, Some(1.0)), (1, 2, Some(-2.0)), (2, 1, Some(1.0))],
            true,
        )
        .unwrap();
        assert!(matches!(bellman_ford(&graph, 0), Err(Error::NegativeCycle)));
    }

    #[test]
    fn test_bellman_ford_unreached() {
        let graph = WeightedGraph::build([0, 1, 2], [(0, 1, Some(1.0))], true).unwrap();
        let tree = bellman_ford(&graph, 0).unwrap();
        assert!(tree.distance(2).unwrap().is_infinite());
        assert_eq!(bellman_ford_pair(&graph, 0, 2).unwrap(), PathResult::unreachable());
    }

    #[test]
    fn test_bellman_ford_unknown_nodes() {
        let graph = WeightedGraph::build([0, 1], [(0, 1, Some(1.0))], true).unwrap();
        assert!(matches!(bellman_ford(&graph, 7), Err(Error::NodeNotFound(7))));
        assert!(matches!(
            bellman_ford_pair(&graph, 0, 8),
            Err(Error::NodeNotFound(8))
        ));
    }
}

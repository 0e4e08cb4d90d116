//! Reference Dijkstra over petgraph
//!
//! petgraph's A* with a zero heuristic, which degenerates to Dijkstra with
//! path tracking. This is the library baseline the priority-queue
//! implementation is measured and cross-checked against.

use super::{PathResult, reject_negative_weights};
use crate::Result;
use crate::graph::{NodeId, WeightedGraph};
use petgraph::algo::astar;
use petgraph::graph::{DiGraph, NodeIndex};

const ALGORITHM: &str = "Dijkstra";

/// Shortest path from `source` to `target`
pub fn reference_dijkstra(graph: &WeightedGraph, source: NodeId, target: NodeId) -> Result<PathResult> {
    reference_dijkstra_on(graph, &graph.to_petgraph(), source, target)
}

/// Run over a petgraph view built by [`WeightedGraph::to_petgraph`]
pub(crate) fn reference_dijkstra_on(
    graph: &WeightedGraph,
    view: &DiGraph<NodeId, f64>,
    source: NodeId,
    target: NodeId,
) -> Result<PathResult> {
    let s = NodeIndex::new(graph.require_index(source)?);
    let goal = NodeIndex::new(graph.require_index(target)?);
    reject_negative_weights(graph, ALGORITHM)?;

    let found = astar(view, s, |n| n == goal, |edge| *edge.weight(), |_| 0.0);
    Ok(match found {
        Some((cost, path)) => PathResult {
            path: Some(path.into_iter().map(|n| view[n]).collect()),
            cost,
        },
        None => PathResult::unreachable(),
    })
}

//! Priority-queue Dijkstra
//!
//! Binary-heap Dijkstra without decrease-key: a node may sit in the heap
//! several times with different distances, and entries that are worse than
//! the node's best-known distance are skipped when popped. Queue entries
//! order by (distance, node id), so equal-distance nodes pop smallest id
//! first and results do not depend on edge insertion order.
//!
//! Requires non-negative edge weights; graphs with a negative edge are
//! rejected before the search starts, even when that edge lies in a
//! component the source cannot reach.

use super::{PathResult, ShortestPathTree, reject_negative_weights, walk_back};
use crate::Result;
use crate::graph::{NodeId, WeightedGraph};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

const ALGORITHM: &str = "priority-queue Dijkstra";

/// Heap entry, reversed so that `BinaryHeap` pops the minimum
#[derive(Debug, PartialEq)]
struct QueueItem {
    distance: f64,
    node: NodeId,
    index: usize,
}

impl Eq for QueueItem {}

impl PartialOrd for QueueItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueItem {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.node.cmp(&self.node))
    }
}

/// Distance and predecessor state of one search, by node index
struct Search {
    distances: Vec<f64>,
    predecessors: Vec<Option<usize>>,
}

fn search(graph: &WeightedGraph, source: usize, target: Option<usize>) -> Search {
    let mut distances = vec![f64::INFINITY; graph.node_count()];
    let mut predecessors = vec![None; graph.node_count()];
    let mut heap = BinaryHeap::new();

    distances[source] = 0.0;
    heap.push(QueueItem {
        distance: 0.0,
        node: graph.node_at(source),
        index: source,
    });

    while let Some(QueueItem {
        distance,
        index: current,
        ..
    }) = heap.pop()
    {
        // The target's first pop carries its final distance
        if Some(current) == target {
            break;
        }

        if distance > distances[current] {
            continue;
        }

        for (neighbor, weight) in graph.neighbors_at(current) {
            let candidate = distance + weight;
            if candidate < distances[neighbor] {
                distances[neighbor] = candidate;
                predecessors[neighbor] = Some(current);
                heap.push(QueueItem {
                    distance: candidate,
                    node: graph.node_at(neighbor),
                    index: neighbor,
                });
            }
        }
    }

    Search {
        distances,
        predecessors,
    }
}

/// Shortest path from `source` to `target`
///
/// Stops as soon as `target` leaves the queue. If `target` cannot be
/// reached the result is [`PathResult::unreachable`] (no path, infinite
/// cost); callers that benchmark should gate on
/// [`reachable`](crate::graph::reachable) instead of relying on this.
///
/// Every edge of the graph is checked for a negative weight, not only the
/// edges reachable from `source`, so a graph either runs under every
/// Dijkstra variant or under none.
pub fn dijkstra(graph: &WeightedGraph, source: NodeId, target: NodeId) -> Result<PathResult> {
    let s = graph.require_index(source)?;
    let t = graph.require_index(target)?;
    reject_negative_weights(graph, ALGORITHM)?;

    let Search {
        distances,
        predecessors,
    } = search(graph, s, Some(t));

    if distances[t].is_infinite() {
        return Ok(PathResult::unreachable());
    }

    let path = walk_back(s, t, graph.node_count(), |idx| predecessors[idx])?;
    Ok(PathResult {
        path: Some(path.into_iter().map(|idx| graph.node_at(idx)).collect()),
        cost: distances[t],
    })
}

/// Full shortest path tree rooted at `source`
pub fn single_source(graph: &WeightedGraph, source: NodeId) -> Result<ShortestPathTree> {
    let s = graph.require_index(source)?;
    reject_negative_weights(graph, ALGORITHM)?;

    let Search {
        distances,
        predecessors,
    } = search(graph, s, None);

    Ok(ShortestPathTree {
        source,
        distances: distances
            .iter()
            .enumerate()
            .map(|(idx, &distance)| (graph.node_at(idx), distance))
            .collect(),
        predecessors: predecessors
            .iter()
            .enumerate()
            .filter_map(|(idx, pred)| pred.map(|p| (graph.node_at(idx), graph.node_at(p))))
            .collect(),
    })
}

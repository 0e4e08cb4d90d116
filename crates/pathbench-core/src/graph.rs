//! Weighted graph model
//!
//! Adjacency-list representation shared by every shortest-path algorithm.
//! Nodes keep their insertion order, which makes neighbor iteration (and
//! therefore tie-breaking between equal-cost paths) deterministic.
//!
//! Edges may or may not carry an explicit weight. Traversal always sees an
//! effective weight, falling back to [`DEFAULT_WEIGHT`] for edges without
//! one. [`WeightedGraph::with_default_weights`] materializes that default
//! for the lifetime of a comparison and removes it again afterwards.
//!
//! Node ids are plain `u64` integers; callers with other identifiers map
//! them to integers before building a graph.

use crate::{Error, Result};
use petgraph::algo::has_path_connecting;
use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::ops::Deref;
use tracing::{debug, info};

/// Node identifier
pub type NodeId = u64;

/// Weight used for edges that carry none
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// A stored edge
///
/// For undirected graphs `from`/`to` record the orientation the edge was
/// first inserted with; both endpoints see it as a neighbor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Edge tail
    pub from: NodeId,
    /// Edge head
    pub to: NodeId,
    /// Explicit weight, if any
    pub weight: Option<f64>,
}

impl Edge {
    /// Weight seen by traversal
    pub fn effective_weight(&self) -> f64 {
        self.weight.unwrap_or(DEFAULT_WEIGHT)
    }
}

/// Graph representation for shortest-path algorithms
#[derive(Debug, Clone)]
pub struct WeightedGraph {
    directed: bool,
    /// Node ids in insertion order; position is the node index
    nodes: Vec<NodeId>,
    index: HashMap<NodeId, usize>,
    edges: Vec<Edge>,
    /// (tail index, head index) -> edge position; undirected keys are sorted
    edge_index: HashMap<(usize, usize), usize>,
    /// Per node index: (neighbor index, edge position)
    adjacency: Vec<Vec<(usize, usize)>>,
}

impl Default for WeightedGraph {
    fn default() -> Self {
        Self::new(false)
    }
}

impl WeightedGraph {
    /// Create a new empty graph
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            nodes: Vec::new(),
            index: HashMap::new(),
            edges: Vec::new(),
            edge_index: HashMap::new(),
            adjacency: Vec::new(),
        }
    }

    /// Create a new empty directed graph
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Create a new empty undirected graph
    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Build a graph from node and edge lists
    ///
    /// Edge endpoints that are missing from `nodes` are added on the fly.
    pub fn build<N, E>(nodes: N, edges: E, directed: bool) -> Result<Self>
    where
        N: IntoIterator<Item = NodeId>,
        E: IntoIterator<Item = (NodeId, NodeId, Option<f64>)>,
    {
        let mut graph = Self::new(directed);
        for node in nodes {
            graph.add_node(node);
        }
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Add a node to the graph, returning its index
    ///
    /// Adding an existing node is a no-op.
    pub fn add_node(&mut self, node: NodeId) -> usize {
        if let Some(&idx) = self.index.get(&node) {
            return idx;
        }
        let idx = self.nodes.len();
        self.nodes.push(node);
        self.index.insert(node, idx);
        self.adjacency.push(Vec::new());
        idx
    }

    /// Add an edge to the graph
    ///
    /// Re-adding an existing edge replaces its weight. NaN and infinite
    /// weights are rejected with [`Error::InvalidWeight`].
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: Option<f64>) -> Result<()> {
        if let Some(w) = weight {
            if !w.is_finite() {
                return Err(Error::InvalidWeight {
                    from,
                    to,
                    weight: w,
                });
            }
        }

        let u = self.add_node(from);
        let v = self.add_node(to);
        let key = self.edge_key(u, v);

        if let Some(&existing) = self.edge_index.get(&key) {
            self.edges[existing].weight = weight;
            return Ok(());
        }

        let position = self.edges.len();
        self.edges.push(Edge { from, to, weight });
        self.edge_index.insert(key, position);
        self.adjacency[u].push((v, position));
        if !self.directed && u != v {
            self.adjacency[v].push((u, position));
        }
        Ok(())
    }

    /// Add an edge carrying an explicit weight
    pub fn add_weighted_edge(&mut self, from: NodeId, to: NodeId, weight: f64) -> Result<()> {
        self.add_edge(from, to, Some(weight))
    }

    fn edge_key(&self, u: usize, v: usize) -> (usize, usize) {
        if self.directed || u <= v {
            (u, v)
        } else {
            (v, u)
        }
    }

    /// Whether edges are directed
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges (an undirected edge counts once)
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All nodes in insertion order
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// All edges in insertion order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Check if a node exists
    pub fn has_node(&self, node: NodeId) -> bool {
        self.index.contains_key(&node)
    }

    /// Position of a node in [`nodes`](Self::nodes)
    pub fn index_of(&self, node: NodeId) -> Option<usize> {
        self.index.get(&node).copied()
    }

    pub(crate) fn require_index(&self, node: NodeId) -> Result<usize> {
        self.index_of(node).ok_or(Error::NodeNotFound(node))
    }

    pub(crate) fn node_at(&self, idx: usize) -> NodeId {
        self.nodes[idx]
    }

    /// Look up the edge between two nodes
    ///
    /// For undirected graphs the orientation of the query does not matter.
    pub fn edge(&self, from: NodeId, to: NodeId) -> Option<&Edge> {
        let u = self.index_of(from)?;
        let v = self.index_of(to)?;
        self.edge_index
            .get(&self.edge_key(u, v))
            .map(|&position| &self.edges[position])
    }

    /// Effective weight of the edge between two nodes
    pub fn edge_weight(&self, from: NodeId, to: NodeId) -> Option<f64> {
        self.edge(from, to).map(Edge::effective_weight)
    }

    /// Neighbors of a node with their effective edge weights
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        self.index_of(node)
            .into_iter()
            .flat_map(move |u| self.neighbors_at(u))
            .map(move |(v, weight)| (self.nodes[v], weight))
    }

    pub(crate) fn neighbors_at(&self, u: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.adjacency[u]
            .iter()
            .map(move |&(v, position)| (v, self.edges[position].effective_weight()))
    }

    /// Whether at least one edge carries an explicit weight
    pub fn is_weighted(&self) -> bool {
        self.edges.iter().any(|edge| edge.weight.is_some())
    }

    /// First edge whose effective weight is negative
    pub fn first_negative_edge(&self) -> Option<&Edge> {
        self.edges.iter().find(|edge| edge.effective_weight() < 0.0)
    }

    /// Sum of edge weights along `path`
    ///
    /// Returns `None` when the path is empty, names an unknown node, or
    /// steps between two nodes that are not adjacent.
    pub fn path_cost(&self, path: &[NodeId]) -> Option<f64> {
        let first = *path.first()?;
        if !self.has_node(first) {
            return None;
        }
        path.windows(2)
            .try_fold(0.0, |cost, step| Some(cost + self.edge_weight(step[0], step[1])?))
    }

    /// Materialize the default weight on every edge until the returned scope drops
    ///
    /// Graphs that already carry at least one explicit weight (or have no
    /// edges) are left untouched.
    pub fn with_default_weights(&mut self) -> WeightScope<'_> {
        let synthesized = !self.edges.is_empty() && !self.is_weighted();
        if synthesized {
            for edge in &mut self.edges {
                edge.weight = Some(DEFAULT_WEIGHT);
            }
            info!(
                edges = self.edges.len(),
                "graph is unweighted, assigned default weight {} to all edges", DEFAULT_WEIGHT
            );
        }
        WeightScope {
            graph: self,
            synthesized,
        }
    }

    /// Convert into a petgraph directed graph
    ///
    /// Node index `i` of the result is `self.nodes()[i]`; undirected edges
    /// become a pair of opposite arcs (self-loops stay single).
    pub fn to_petgraph(&self) -> DiGraph<NodeId, f64> {
        let mut graph = DiGraph::with_capacity(self.nodes.len(), self.edges.len() * 2);
        for &node in &self.nodes {
            graph.add_node(node);
        }
        for edge in &self.edges {
            let u = NodeIndex::new(self.index[&edge.from]);
            let v = NodeIndex::new(self.index[&edge.to]);
            let weight = edge.effective_weight();
            graph.add_edge(u, v, weight);
            if !self.directed && u != v {
                graph.add_edge(v, u, weight);
            }
        }
        graph
    }
}

/// Scoped default-weight assignment
///
/// Dereferences to the graph. Weights synthesized by
/// [`WeightedGraph::with_default_weights`] are removed when the scope drops,
/// whether the comparison finished, returned an error, or unwound.
pub struct WeightScope<'g> {
    graph: &'g mut WeightedGraph,
    synthesized: bool,
}

impl WeightScope<'_> {
    /// Whether this scope assigned weights that it will remove
    pub fn synthesized(&self) -> bool {
        self.synthesized
    }
}

impl Deref for WeightScope<'_> {
    type Target = WeightedGraph;

    fn deref(&self) -> &WeightedGraph {
        self.graph
    }
}

impl Drop for WeightScope<'_> {
    fn drop(&mut self) {
        if self.synthesized {
            for edge in &mut self.graph.edges {
                edge.weight = None;
            }
            debug!(edges = self.graph.edges.len(), "removed synthesized edge weights");
        }
    }
}

/// Check whether `target` can be reached from `source`
pub fn reachable(graph: &WeightedGraph, source: NodeId, target: NodeId) -> Result<bool> {
    let u = graph.require_index(source)?;
    let v = graph.require_index(target)?;
    let view = graph.to_petgraph();
    Ok(has_path_connecting(
        &view,
        NodeIndex::new(u),
        NodeIndex::new(v),
        None,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle(directed: bool) -> WeightedGraph {
        WeightedGraph::build(
            [1, 2, 3],
            [(1, 2, Some(1.0)), (2, 3, Some(2.0)), (1, 3, Some(4.0))],
            directed,
        )
        .unwrap()
    }

    #[test]
    fn test_undirected_neighbors_from_both_ends() {
        let graph = triangle(false);
        let mut from_three: Vec<_> = graph.neighbors(3).collect();
        from_three.sort_by(|a, b| a.0.cmp(&b.0));
        assert_eq!(from_three, vec![(1, 4.0), (2, 2.0)]);
        assert_eq!(graph.edge_weight(3, 1), Some(4.0));
    }

    #[test]
    fn test_directed_neighbors_follow_orientation() {
        let graph = triangle(true);
        assert_eq!(graph.neighbors(3).count(), 0);
        assert_eq!(graph.edge_weight(3, 1), None);
        assert_eq!(graph.edge_weight(1, 3), Some(4.0));
    }

    #[test]
    fn test_readding_edge_replaces_weight() {
        let mut graph = triangle(false);
        graph.add_weighted_edge(2, 1, 7.0).unwrap();
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.edge_weight(1, 2), Some(7.0));
    }

    #[test]
    fn test_self_loop_listed_once() {
        let mut graph = WeightedGraph::undirected();
        graph.add_weighted_edge(5, 5, 3.0).unwrap();
        assert_eq!(graph.neighbors(5).collect::<Vec<_>>(), vec![(5, 3.0)]);
    }

    #[test]
    fn test_nan_weight_rejected() {
        let mut graph = WeightedGraph::directed();
        let err = graph.add_weighted_edge(0, 1, f64::NAN).unwrap_err();
        assert!(matches!(err, Error::InvalidWeight { from: 0, to: 1, .. }));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_non_finite_weight_rejected() {
        let mut graph = WeightedGraph::undirected();
        for weight in [f64::INFINITY, f64::NEG_INFINITY] {
            let err = graph.add_weighted_edge(0, 1, weight).unwrap_err();
            assert!(matches!(err, Error::InvalidWeight { from: 0, to: 1, .. }));
        }
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.node_count(), 0);
    }

    #[test]
    fn test_missing_weight_defaults_to_one() {
        let graph = WeightedGraph::build([], [(0, 1, None)], true).unwrap();
        assert!(!graph.is_weighted());
        assert_eq!(graph.edge_weight(0, 1), Some(DEFAULT_WEIGHT));
    }

    #[test]
    fn test_weight_scope_removes_synthesized_weights() {
        let mut graph = WeightedGraph::build([], [(0, 1, None), (1, 2, None)], false).unwrap();
        {
            let scope = graph.with_default_weights();
            assert!(scope.synthesized());
            assert!(scope.edges().iter().all(|e| e.weight == Some(1.0)));
        }
        assert!(graph.edges().iter().all(|e| e.weight.is_none()));
    }

    #[test]
    fn test_weight_scope_leaves_weighted_graph_alone() {
        let mut graph = triangle(true);
        let before = graph.edges().to_vec();
        {
            let scope = graph.with_default_weights();
            assert!(!scope.synthesized());
        }
        assert_eq!(graph.edges(), before.as_slice());
    }

    #[test]
    fn test_path_cost() {
        let graph = triangle(false);
        assert_eq!(graph.path_cost(&[1, 2, 3]), Some(3.0));
        assert_eq!(graph.path_cost(&[3, 2, 1]), Some(3.0));
        assert_eq!(graph.path_cost(&[2]), Some(0.0));
        assert_eq!(graph.path_cost(&[]), None);
        assert_eq!(graph.path_cost(&[9]), None);
        assert_eq!(triangle(true).path_cost(&[3, 1]), None);
    }

    #[test]
    fn test_reachable() {
        let mut graph = triangle(true);
        graph.add_node(4);
        assert!(reachable(&graph, 1, 3).unwrap());
        assert!(!reachable(&graph, 3, 1).unwrap());
        assert!(!reachable(&graph, 1, 4).unwrap());
        assert!(reachable(&graph, 4, 4).unwrap());
        assert!(matches!(
            reachable(&graph, 1, 42),
            Err(Error::NodeNotFound(42))
        ));
    }

    #[test]
    fn test_to_petgraph_doubles_undirected_edges() {
        let graph = triangle(false);
        let view = graph.to_petgraph();
        assert_eq!(view.node_count(), 3);
        assert_eq!(view.edge_count(), 6);
        assert_eq!(triangle(true).to_petgraph().edge_count(), 3);
    }
}

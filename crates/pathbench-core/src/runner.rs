//! Algorithm dispatch and comparison harness
//!
//! Runs one or all shortest-path algorithms for a (source, target) pair on
//! the same graph and turns each run into a [`Report`]: path, cost,
//! measured wall-clock time, a theoretical operation count derived from the
//! algorithm's complexity class, and the resulting time per operation.
//!
//! Every entry point:
//!
//! 1. materializes default weights on unweighted graphs for the duration of
//!    the call ([`WeightedGraph::with_default_weights`]);
//! 2. checks reachability once; single-source algorithms are not timed for
//!    an unreachable pair and report no path instead;
//! 3. runs algorithms one after another, so timings never overlap.
//!
//! A failing algorithm (negative weight, negative cycle, corrupted
//! predecessors) is recorded in its own report and does not stop the rest
//! of a comparison. Only input errors, such as an unknown node, fail the
//! whole call.

use crate::algorithms::floyd_warshall::{AllPairsShortestPaths, floyd_warshall};
use crate::algorithms::{PathResult, bellman_ford, dijkstra, reference};
use crate::graph::{NodeId, WeightedGraph};
use crate::{Error, Result};
use petgraph::algo::has_path_connecting;
use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};
use tracing::{debug, error, warn};

/// Shortest-path algorithms known to the harness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Library Dijkstra (petgraph)
    Dijkstra,
    /// Hand-written priority-queue Dijkstra with early exit
    PriorityQueueDijkstra,
    /// Bellman-Ford (petgraph)
    BellmanFord,
    /// Floyd-Warshall all-pairs, one pair extracted
    FloydWarshall,
}

impl Algorithm {
    /// Every algorithm, in comparison order
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Dijkstra,
        Algorithm::PriorityQueueDijkstra,
        Algorithm::BellmanFord,
        Algorithm::FloydWarshall,
    ];

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "Dijkstra",
            Algorithm::PriorityQueueDijkstra => "Priority-Queue Dijkstra",
            Algorithm::BellmanFord => "Bellman-Ford",
            Algorithm::FloydWarshall => "Floyd-Warshall",
        }
    }

    /// Complexity class used for the operation estimate
    pub fn complexity(self) -> &'static str {
        match self {
            Algorithm::Dijkstra | Algorithm::PriorityQueueDijkstra => "(V + E) log V",
            Algorithm::BellmanFord => "V * E",
            Algorithm::FloydWarshall => "V^3",
        }
    }

    /// Theoretical operation count for `nodes` vertices and `edges` edges
    ///
    /// `None` for the Dijkstra variants when there is at most one node,
    /// where `log2(V)` carries no information.
    pub fn theoretical_ops(self, nodes: usize, edges: usize) -> Option<f64> {
        let v = nodes as f64;
        let e = edges as f64;
        match self {
            Algorithm::Dijkstra | Algorithm::PriorityQueueDijkstra => {
                (nodes > 1).then(|| (v + e) * v.log2())
            }
            Algorithm::BellmanFord => Some(v * e),
            Algorithm::FloydWarshall => Some(v.powi(3)),
        }
    }

    /// Whether the algorithm answers a single (source, target) query
    pub fn is_single_source(self) -> bool {
        !matches!(self, Algorithm::FloydWarshall)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn normalize_selector(s: &str) -> String {
    s.trim()
        .to_ascii_lowercase()
        .replace("'s", "")
        .replace(['_', ' '], "-")
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match normalize_selector(s).as_str() {
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "priority-queue-dijkstra" | "pq-dijkstra" | "improved-dijkstra" | "improved" => {
                Ok(Algorithm::PriorityQueueDijkstra)
            }
            "bellman-ford" | "bellmanford" => Ok(Algorithm::BellmanFord),
            "floyd-warshall" | "floydwarshall" => Ok(Algorithm::FloydWarshall),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// What to run: one algorithm or the whole comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// A single algorithm
    Single(Algorithm),
    /// Every algorithm in [`Algorithm::ALL`] order
    CompareAll,
}

impl Selection {
    /// Algorithms covered by this selection, in run order
    pub fn algorithms(self) -> Vec<Algorithm> {
        match self {
            Selection::Single(algorithm) => vec![algorithm],
            Selection::CompareAll => Algorithm::ALL.to_vec(),
        }
    }
}

impl FromStr for Selection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match normalize_selector(s).as_str() {
            "all" | "compare" | "compare-all" => Ok(Selection::CompareAll),
            _ => s.parse().map(Selection::Single),
        }
    }
}

/// How a single algorithm run ended
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// A path was found
    Found,
    /// No path connects source and target
    Unreachable,
    /// The algorithm rejected the graph or hit a defect
    Failed {
        /// Rendered error
        error: String,
    },
}

/// Result, timing and complexity estimate of one algorithm run
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Algorithm that produced this report
    pub algorithm: Algorithm,
    /// Nodes from source to target; `None` without a path
    pub path: Option<Vec<NodeId>>,
    /// Path cost; infinite without a path
    pub cost: f64,
    /// Measured wall-clock time (zero when the run was skipped)
    #[serde(rename = "elapsed_secs", serialize_with = "serialize_secs")]
    pub elapsed: Duration,
    /// Theoretical operation count; `None` when undefined
    pub theoretical_ops: Option<f64>,
    /// Seconds per theoretical operation; `None` when not applicable
    pub time_per_op: Option<f64>,
    /// How the run ended
    pub outcome: Outcome,
}

fn serialize_secs<S: Serializer>(elapsed: &Duration, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_f64(elapsed.as_secs_f64())
}

fn time_per_op(elapsed: Duration, theoretical_ops: Option<f64>) -> Option<f64> {
    theoretical_ops
        .filter(|&ops| ops > 0.0)
        .map(|ops| elapsed.as_secs_f64() / ops)
}

impl Report {
    fn completed(
        algorithm: Algorithm,
        result: PathResult,
        elapsed: Duration,
        theoretical_ops: Option<f64>,
    ) -> Self {
        let outcome = if result.is_reachable() {
            Outcome::Found
        } else {
            Outcome::Unreachable
        };
        Self {
            algorithm,
            path: result.path,
            cost: result.cost,
            elapsed,
            theoretical_ops,
            time_per_op: time_per_op(elapsed, theoretical_ops),
            outcome,
        }
    }

    fn skipped(algorithm: Algorithm, theoretical_ops: Option<f64>) -> Self {
        Self {
            algorithm,
            path: None,
            cost: f64::INFINITY,
            elapsed: Duration::ZERO,
            theoretical_ops,
            time_per_op: None,
            outcome: Outcome::Unreachable,
        }
    }

    fn failed(
        algorithm: Algorithm,
        err: &Error,
        elapsed: Duration,
        theoretical_ops: Option<f64>,
    ) -> Self {
        Self {
            algorithm,
            path: None,
            cost: f64::INFINITY,
            elapsed,
            theoretical_ops,
            time_per_op: None,
            outcome: Outcome::Failed {
                error: err.to_string(),
            },
        }
    }

    /// Whether a path was found
    pub fn is_found(&self) -> bool {
        self.outcome == Outcome::Found
    }

    /// Elapsed time in seconds
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Floyd-Warshall over the whole graph, with timing
#[derive(Debug, Clone)]
pub struct AllPairsReport {
    /// Distance and predecessor matrices
    pub matrix: AllPairsShortestPaths,
    /// Measured wall-clock time
    pub elapsed: Duration,
    /// `V^3`
    pub theoretical_ops: Option<f64>,
    /// Seconds per theoretical operation
    pub time_per_op: Option<f64>,
}

/// Run `f` and measure its wall-clock duration
pub fn measure<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let output = f();
    (output, start.elapsed())
}

/// Per-call state shared by every algorithm run on one (source, target) pair
struct Harness<'g> {
    graph: &'g WeightedGraph,
    view: DiGraph<NodeId, f64>,
    source: NodeId,
    target: NodeId,
    reachable: bool,
}

impl<'g> Harness<'g> {
    fn new(graph: &'g WeightedGraph, source: NodeId, target: NodeId) -> Result<Self> {
        let s = graph.require_index(source)?;
        let t = graph.require_index(target)?;
        let view = graph.to_petgraph();
        let reachable = has_path_connecting(&view, NodeIndex::new(s), NodeIndex::new(t), None);

        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            directed = graph.is_directed(),
            from = source,
            to = target,
            reachable,
            "prepared shortest-path comparison"
        );

        Ok(Self {
            graph,
            view,
            source,
            target,
            reachable,
        })
    }

    fn run(&self, algorithm: Algorithm) -> Report {
        let ops = algorithm.theoretical_ops(self.graph.node_count(), self.graph.edge_count());

        if algorithm.is_single_source() && !self.reachable {
            debug!(
                %algorithm,
                from = self.source,
                to = self.target,
                "no path between nodes, skipping timed run"
            );
            return Report::skipped(algorithm, ops);
        }

        let (result, elapsed) = measure(|| self.solve(algorithm));
        match result {
            Ok(found) => {
                debug!(
                    %algorithm,
                    cost = found.cost,
                    elapsed_secs = elapsed.as_secs_f64(),
                    "algorithm finished"
                );
                Report::completed(algorithm, found, elapsed, ops)
            }
            Err(err) => {
                if err.is_internal() {
                    error!(%algorithm, error = %err, "shortest-path invariant violated");
                } else {
                    warn!(%algorithm, error = %err, "algorithm failed");
                }
                Report::failed(algorithm, &err, elapsed, ops)
            }
        }
    }

    fn solve(&self, algorithm: Algorithm) -> Result<PathResult> {
        let (graph, source, target) = (self.graph, self.source, self.target);
        match algorithm {
            Algorithm::Dijkstra => reference::reference_dijkstra_on(graph, &self.view, source, target),
            Algorithm::PriorityQueueDijkstra => dijkstra::dijkstra(graph, source, target),
            Algorithm::BellmanFord => {
                bellman_ford::bellman_ford_on(graph, &self.view, source)?.pair(target)
            }
            Algorithm::FloydWarshall => floyd_warshall(graph)?.pair(source, target),
        }
    }
}

/// Run one algorithm for `source -> target`
pub fn run_algorithm(
    graph: &mut WeightedGraph,
    algorithm: Algorithm,
    source: NodeId,
    target: NodeId,
) -> Result<Report> {
    let scope = graph.with_default_weights();
    let harness = Harness::new(&scope, source, target)?;
    Ok(harness.run(algorithm))
}

/// Run every algorithm for `source -> target`, in [`Algorithm::ALL`] order
pub fn compare_all(graph: &mut WeightedGraph, source: NodeId, target: NodeId) -> Result<Vec<Report>> {
    run_selection(graph, Selection::CompareAll, source, target)
}

/// Run the algorithms named by `selection` for `source -> target`
pub fn run_selection(
    graph: &mut WeightedGraph,
    selection: Selection,
    source: NodeId,
    target: NodeId,
) -> Result<Vec<Report>> {
    let scope = graph.with_default_weights();
    let harness = Harness::new(&scope, source, target)?;
    Ok(selection
        .algorithms()
        .into_iter()
        .map(|algorithm| harness.run(algorithm))
        .collect())
}

/// Floyd-Warshall over every pair, timed
pub fn all_pairs_report(graph: &mut WeightedGraph) -> Result<AllPairsReport> {
    let scope = graph.with_default_weights();
    let (matrix, elapsed) = measure(|| floyd_warshall(&scope));
    let matrix = matrix?;
    let theoretical_ops =
        Algorithm::FloydWarshall.theoretical_ops(scope.node_count(), scope.edge_count());

    debug!(
        nodes = scope.node_count(),
        elapsed_secs = elapsed.as_secs_f64(),
        "all-pairs shortest paths computed"
    );

    Ok(AllPairsReport {
        matrix,
        elapsed,
        theoretical_ops,
        time_per_op: time_per_op(elapsed, theoretical_ops),
    })
}

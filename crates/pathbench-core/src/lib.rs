//! Pathbench Core - Shortest-Path Computation and Benchmarking
//!
//! This crate provides the engine behind `pathbench`:
//! - Weighted graph model (directed or undirected, optional edge weights)
//! - Priority-queue Dijkstra with early exit
//! - Floyd-Warshall with predecessor-matrix path reconstruction
//! - Library baselines (Dijkstra, Bellman-Ford) over petgraph
//! - Comparison harness with timing and theoretical operation counts
//! - Random graph generation and adjacency-matrix I/O
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │              Comparison Harness              │
//! │ (weight synthesis, reachability, timing)    │
//! └──────────────┬──────────────────────────────┘
//!                │
//! ┌──────────────┴──────────────────────────────┐
//! │                Algorithms                    │
//! │ (PQ Dijkstra, Floyd-Warshall, petgraph)     │
//! └──────────────┬──────────────────────────────┘
//!                │
//! ┌──────────────┴──────────────────────────────┐
//! │              Weighted Graph                  │
//! │   (generator, adjacency-matrix reader)      │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use pathbench_core::{Algorithm, WeightedGraph, run_algorithm};
//!
//! let mut graph = WeightedGraph::build(
//!     [0, 1, 2],
//!     [(0, 1, Some(1.0)), (1, 2, Some(2.0)), (0, 2, Some(5.0))],
//!     true,
//! )?;
//! let report = run_algorithm(&mut graph, Algorithm::PriorityQueueDijkstra, 0, 2)?;
//! assert_eq!(report.path, Some(vec![0, 1, 2]));
//! assert_eq!(report.cost, 3.0);
//! # Ok::<(), pathbench_core::Error>(())
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod algorithms;
pub mod error;
pub mod generator;
pub mod graph;
pub mod matrix;
pub mod runner;

pub use algorithms::floyd_warshall::AllPairsShortestPaths;
pub use algorithms::{PathResult, ShortestPathTree};
pub use error::{Error, Result};
pub use generator::{RandomGraphConfig, generate_random_graph};
pub use graph::{DEFAULT_WEIGHT, Edge, NodeId, WeightScope, WeightedGraph, reachable};
pub use runner::{
    AllPairsReport, Algorithm, Outcome, Report, Selection, all_pairs_report, compare_all,
    run_algorithm, run_selection,
};

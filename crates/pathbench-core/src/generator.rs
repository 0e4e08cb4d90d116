//! Random graph generation
//!
//! Erdős–Rényi style: every ordered pair of distinct nodes gets an edge
//! with a fixed probability. Weighted graphs draw integer weights
//! uniformly from an inclusive range; unweighted graphs leave edges
//! without a weight so the harness synthesizes them.

use crate::graph::{NodeId, WeightedGraph};
use crate::{Error, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Parameters for [`generate_random_graph`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomGraphConfig {
    /// Number of nodes, labelled `0..nodes`
    pub nodes: usize,
    /// Probability of an edge between each ordered pair of distinct nodes
    pub edge_probability: f64,
    /// Generate a directed graph
    pub directed: bool,
    /// Give edges explicit weights
    pub weighted: bool,
    /// Smallest weight (inclusive)
    pub min_weight: i64,
    /// Largest weight (inclusive)
    pub max_weight: i64,
    /// RNG seed; entropy-seeded when absent
    pub seed: Option<u64>,
}

impl Default for RandomGraphConfig {
    fn default() -> Self {
        Self {
            nodes: 10,
            edge_probability: 0.3,
            directed: false,
            weighted: true,
            min_weight: 1,
            max_weight: 10,
            seed: None,
        }
    }
}

impl RandomGraphConfig {
    /// Check that the parameters describe a graph that can be generated
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.edge_probability) {
            return Err(Error::invalid_input(format!(
                "edge probability must be within [0, 1], got {}",
                self.edge_probability
            )));
        }
        if self.weighted && self.min_weight > self.max_weight {
            return Err(Error::invalid_input(format!(
                "minimum weight {} exceeds maximum weight {}",
                self.min_weight, self.max_weight
            )));
        }
        Ok(())
    }
}

/// Generate a random graph
pub fn generate_random_graph(config: &RandomGraphConfig) -> Result<WeightedGraph> {
    config.validate()?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut graph = WeightedGraph::new(config.directed);
    for node in 0..config.nodes {
        graph.add_node(node as NodeId);
    }

    for i in 0..config.nodes {
        for j in 0..config.nodes {
            if i == j || !rng.gen_bool(config.edge_probability) {
                continue;
            }
            let weight = config
                .weighted
                .then(|| rng.gen_range(config.min_weight..=config.max_weight) as f64);
            graph.add_edge(i as NodeId, j as NodeId, weight)?;
        }
    }

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        directed = config.directed,
        weighted = config.weighted,
        seed = ?config.seed,
        "generated random graph"
    );

    Ok(graph)
}

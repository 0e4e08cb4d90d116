use anyhow::{Context, Result};
use clap::Args;
use pathbench_core::generate_random_graph;
use pathbench_core::matrix::{adjacency_matrix, format_adjacency_matrix};
use serde_json::json;
use std::fs;
use std::path::PathBuf;

use super::{GeneratorArgs, OutputContext};
use crate::config::Config;

#[derive(Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub generator: GeneratorArgs,

    /// Generate a directed graph
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub directed: Option<bool>,

    /// Draw random edge weights
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub weighted: Option<bool>,

    /// Write the adjacency matrix to a file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub fn execute(args: GenerateArgs, cfg: &Config, output: &OutputContext) -> Result<()> {
    let params = args
        .generator
        .apply(&cfg.generator, args.directed, args.weighted);
    let graph = generate_random_graph(&params).context("failed to generate random graph")?;

    if let Some(path) = &args.output {
        fs::write(path, format_adjacency_matrix(&graph))
            .with_context(|| format!("failed to write {}", path.display()))?;
        if !output.json {
            output.print_success(&format!(
                "Wrote {} nodes, {} edges to {}",
                graph.node_count(),
                graph.edge_count(),
                path.display()
            ));
            return Ok(());
        }
    }

    if output.json {
        return output.print_json(&json!({
            "nodes": graph.node_count(),
            "edges": graph.edge_count(),
            "directed": graph.is_directed(),
            "weighted": graph.is_weighted(),
            "seed": params.seed,
            "matrix": adjacency_matrix(&graph),
        }));
    }

    print!("{}", format_adjacency_matrix(&graph));
    Ok(())
}

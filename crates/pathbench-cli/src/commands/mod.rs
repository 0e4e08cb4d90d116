pub mod compare;
pub mod completion;
pub mod config;
pub mod generate;
pub mod inspect;
pub mod matrix;
pub mod run;

use anyhow::{Context, Result, bail};
use clap::Args;
use comfy_table::{Table, presets::UTF8_FULL};
use pathbench_core::{
    NodeId, Outcome, RandomGraphConfig, Report, WeightedGraph, generate_random_graph,
    matrix::read_adjacency_matrix,
};
use std::path::PathBuf;

use crate::config::Config;

#[derive(Debug, Clone)]
pub struct OutputContext {
    pub json: bool,
    pub verbose: bool,
    pub debug: bool,
}

/// Random graph parameters shared by `--random` and `generate`
#[derive(Args, Debug, Clone, Default)]
pub struct GeneratorArgs {
    /// Number of nodes
    #[arg(long, short = 'n')]
    pub nodes: Option<usize>,

    /// Edge probability for each ordered node pair
    #[arg(long, short = 'p')]
    pub probability: Option<f64>,

    /// Smallest generated weight
    #[arg(long)]
    pub min_weight: Option<i64>,

    /// Largest generated weight
    #[arg(long)]
    pub max_weight: Option<i64>,

    /// RNG seed for reproducible graphs
    #[arg(long)]
    pub seed: Option<u64>,
}

impl GeneratorArgs {
    /// Overlay the flags that were given on top of `base`
    pub fn apply(
        &self,
        base: &RandomGraphConfig,
        directed: Option<bool>,
        weighted: Option<bool>,
    ) -> RandomGraphConfig {
        RandomGraphConfig {
            nodes: self.nodes.unwrap_or(base.nodes),
            edge_probability: self.probability.unwrap_or(base.edge_probability),
            directed: directed.unwrap_or(base.directed),
            weighted: weighted.unwrap_or(base.weighted),
            min_weight: self.min_weight.unwrap_or(base.min_weight),
            max_weight: self.max_weight.unwrap_or(base.max_weight),
            seed: self.seed.or(base.seed),
        }
    }
}

/// Where the graph comes from
#[derive(Args, Debug, Clone)]
#[command(group(
    clap::ArgGroup::new("input")
        .required(true)
        .args(["graph", "random"])
))]
pub struct GraphArgs {
    /// Adjacency-matrix file
    #[arg(long, short = 'g')]
    pub graph: Option<PathBuf>,

    /// Generate a random graph instead of reading a file
    #[arg(long)]
    pub random: bool,

    /// Treat edges as directed (`--directed=false` to force undirected)
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub directed: Option<bool>,

    /// Keep edge weights (`--weighted=false` to ignore matrix values)
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub weighted: Option<bool>,

    #[command(flatten)]
    pub generator: GeneratorArgs,
}

impl GraphArgs {
    pub fn load(&self, cfg: &Config) -> Result<WeightedGraph> {
        if self.random {
            let params = self
                .generator
                .apply(&cfg.generator, self.directed, self.weighted);
            tracing::debug!(?params, "generating random graph");
            return generate_random_graph(&params).context("failed to generate random graph");
        }

        let Some(path) = &self.graph else {
            bail!("either --graph FILE or --random is required");
        };
        let directed = self.directed.unwrap_or(cfg.directed);
        let weighted = self.weighted.unwrap_or(cfg.weighted);
        read_adjacency_matrix(path, directed, weighted)
            .with_context(|| format!("failed to load graph from {}", path.display()))
    }
}

impl OutputContext {
    pub fn print_table(&self, columns: &[&str], rows: Vec<Vec<String>>) {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(columns);

        for row in rows {
            table.add_row(row);
        }

        println!("{table}");
    }

    pub fn print_json<T: serde::Serialize>(&self, data: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(data)?);
        Ok(())
    }

    pub fn print_success(&self, message: &str) {
        use colored::Colorize;
        println!("{} {}", "✓".green(), message);
    }

    pub fn print_error(&self, message: &str) {
        use colored::Colorize;
        eprintln!("{} {}", "✗".red(), message);
    }

    pub fn print_info(&self, message: &str) {
        use colored::Colorize;
        println!("{} {}", "ℹ".blue(), message);
    }

    /// Print algorithm reports as a table or a JSON array
    pub fn print_reports(&self, reports: &[Report], source: NodeId, target: NodeId) -> Result<()> {
        if self.json {
            return self.print_json(&reports);
        }

        let rows = reports
            .iter()
            .map(|report| {
                vec![
                    report.algorithm.to_string(),
                    report.path.as_deref().map_or_else(|| "-".to_string(), format_path),
                    format_cost(report.cost),
                    format!("{:.6}", report.elapsed_secs()),
                    format_optional(report.theoretical_ops, |ops| format!("{ops:.0}")),
                    format_optional(report.time_per_op, |t| format!("{t:.3e}")),
                    match &report.outcome {
                        Outcome::Found => "found".to_string(),
                        Outcome::Unreachable => "no path".to_string(),
                        Outcome::Failed { .. } => "failed".to_string(),
                    },
                ]
            })
            .collect();

        self.print_table(
            &["Algorithm", "Path", "Cost", "Time (s)", "Theoretical Ops", "Time/Op (s)", "Status"],
            rows,
        );

        for report in reports {
            if let Outcome::Failed { error } = &report.outcome {
                self.print_error(&format!("{}: {}", report.algorithm, error));
            }
        }
        if reports.iter().any(|r| r.outcome == Outcome::Unreachable) {
            self.print_info(&format!("No path from {} to {}", source, target));
        }
        if self.verbose {
            for report in reports {
                println!(
                    "{:<24} complexity O({})",
                    report.algorithm.name(),
                    report.algorithm.complexity()
                );
            }
        }
        Ok(())
    }
}

pub fn format_path(path: &[NodeId]) -> String {
    path.iter()
        .map(NodeId::to_string)
        .collect::<Vec<_>>()
        .join(" → ")
}

pub fn format_cost(cost: f64) -> String {
    if cost.is_infinite() {
        "∞".to_string()
    } else {
        cost.to_string()
    }
}

fn format_optional(value: Option<f64>, render: impl Fn(f64) -> String) -> String {
    value.map_or_else(|| "N/A".to_string(), render)
}

use anyhow::{Context, Result};
use clap::Args;
use pathbench_core::{NodeId, Selection, run_selection};

use super::{GraphArgs, OutputContext};
use crate::config::Config;

#[derive(Args)]
pub struct RunArgs {
    /// Algorithm: dijkstra, pq-dijkstra, bellman-ford, floyd-warshall or all
    pub algorithm: Selection,

    /// Source node
    #[arg(long, short)]
    pub source: NodeId,

    /// Target node
    #[arg(long, short)]
    pub target: NodeId,

    #[command(flatten)]
    pub graph: GraphArgs,
}

pub fn execute(args: RunArgs, cfg: &Config, output: &OutputContext) -> Result<()> {
    let mut graph = args.graph.load(cfg)?;
    let reports = run_selection(&mut graph, args.algorithm, args.source, args.target)
        .with_context(|| format!("cannot run {} -> {}", args.source, args.target))?;
    output.print_reports(&reports, args.source, args.target)
}

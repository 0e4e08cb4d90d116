use anyhow::{Context, Result};
use clap::Args;
use pathbench_core::{NodeId, compare_all};

use super::{GraphArgs, OutputContext};
use crate::config::Config;

#[derive(Args)]
pub struct CompareArgs {
    /// Source node
    #[arg(long, short)]
    pub source: NodeId,

    /// Target node
    #[arg(long, short)]
    pub target: NodeId,

    #[command(flatten)]
    pub graph: GraphArgs,
}

pub fn execute(args: CompareArgs, cfg: &Config, output: &OutputContext) -> Result<()> {
    let mut graph = args.graph.load(cfg)?;
    if !output.json {
        output.print_info(&format!(
            "Comparing algorithms on {} nodes, {} edges ({})",
            graph.node_count(),
            graph.edge_count(),
            if graph.is_directed() { "directed" } else { "undirected" }
        ));
    }

    let reports = compare_all(&mut graph, args.source, args.target)
        .with_context(|| format!("cannot compare {} -> {}", args.source, args.target))?;
    output.print_reports(&reports, args.source, args.target)?;

    if !output.json {
        if let Some(fastest) = reports
            .iter()
            .filter(|report| report.is_found())
            .min_by(|a, b| a.elapsed.cmp(&b.elapsed))
        {
            output.print_success(&format!(
                "Fastest: {} ({:.6}s)",
                fastest.algorithm,
                fastest.elapsed_secs()
            ));
        }
    }
    Ok(())
}

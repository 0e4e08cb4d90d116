use anyhow::{Context, Result};
use clap::Args;
use pathbench_core::matrix::{adjacency_matrix, format_adjacency_matrix};
use pathbench_core::{NodeId, reachable};
use serde_json::json;

use super::{GraphArgs, OutputContext};
use crate::config::Config;

#[derive(Args)]
pub struct InspectArgs {
    /// Check whether TARGET can be reached from this node
    #[arg(long, short, requires = "target")]
    pub source: Option<NodeId>,

    /// Node to check reachability for
    #[arg(long, short, requires = "source")]
    pub target: Option<NodeId>,

    #[command(flatten)]
    pub graph: GraphArgs,
}

pub fn execute(args: InspectArgs, cfg: &Config, output: &OutputContext) -> Result<()> {
    let graph = args.graph.load(cfg)?;

    let reachability = match (args.source, args.target) {
        (Some(s), Some(t)) => Some(
            reachable(&graph, s, t).with_context(|| format!("cannot check {} -> {}", s, t))?,
        ),
        _ => None,
    };

    if output.json {
        return output.print_json(&json!({
            "nodes": graph.nodes(),
            "node_count": graph.node_count(),
            "edge_count": graph.edge_count(),
            "directed": graph.is_directed(),
            "weighted": graph.is_weighted(),
            "edges": graph.edges(),
            "matrix": adjacency_matrix(&graph),
            "reachable": reachability,
        }));
    }

    println!("Graph");
    println!("=====");
    println!("Nodes:    {}", graph.node_count());
    println!("Edges:    {}", graph.edge_count());
    println!("Directed: {}", graph.is_directed());
    println!("Weighted: {}", graph.is_weighted());
    println!();
    print!("{}", format_adjacency_matrix(&graph));

    if let (Some(s), Some(t), Some(found)) = (args.source, args.target, reachability) {
        if found {
            output.print_success(&format!("{} is reachable from {}", t, s));
        } else {
            output.print_info(&format!("No path from {} to {}", s, t));
        }
    }
    Ok(())
}

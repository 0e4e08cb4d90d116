use anyhow::{Context, Result};
use clap::Args;
use pathbench_core::all_pairs_report;
use serde_json::json;

use super::{GraphArgs, OutputContext, format_cost, format_path};
use crate::config::Config;

#[derive(Args)]
pub struct MatrixArgs {
    /// List every pair with its path instead of the distance matrix
    #[arg(long)]
    pub pairs: bool,

    #[command(flatten)]
    pub graph: GraphArgs,
}

pub fn execute(args: MatrixArgs, cfg: &Config, output: &OutputContext) -> Result<()> {
    let mut graph = args.graph.load(cfg)?;
    let report = all_pairs_report(&mut graph).context("all-pairs computation failed")?;
    let nodes = report.matrix.nodes().to_vec();

    if output.json {
        let distances: Vec<Vec<Option<f64>>> = report
            .matrix
            .distances()
            .iter()
            .map(|row| row.iter().map(|&d| d.is_finite().then_some(d)).collect())
            .collect();
        return output.print_json(&json!({
            "nodes": nodes,
            "distances": distances,
            "elapsed_secs": report.elapsed.as_secs_f64(),
            "theoretical_ops": report.theoretical_ops,
            "time_per_op": report.time_per_op,
        }));
    }

    if args.pairs {
        let mut rows = Vec::new();
        for &u in &nodes {
            for &v in &nodes {
                let pair = report.matrix.pair(u, v)?;
                rows.push(vec![
                    u.to_string(),
                    v.to_string(),
                    format_cost(pair.cost),
                    pair.path.as_deref().map_or_else(|| "-".to_string(), format_path),
                ]);
            }
        }
        output.print_table(&["From", "To", "Distance", "Path"], rows);
    } else {
        let mut header = vec![String::new()];
        header.extend(nodes.iter().map(|n| n.to_string()));
        let header: Vec<&str> = header.iter().map(String::as_str).collect();

        let rows = nodes
            .iter()
            .zip(report.matrix.distances())
            .map(|(node, row)| {
                std::iter::once(node.to_string())
                    .chain(row.iter().map(|&d| format_cost(d)))
                    .collect()
            })
            .collect();
        output.print_table(&header, rows);
    }

    output.print_info(&format!(
        "Floyd-Warshall: {:.6}s, {} theoretical ops",
        report.elapsed.as_secs_f64(),
        report
            .theoretical_ops
            .map_or_else(|| "N/A".to_string(), |ops| format!("{ops:.0}"))
    ));
    Ok(())
}

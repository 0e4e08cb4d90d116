//! Adjacency-matrix input and output
//!
//! Text format: one row per line, whitespace-separated numbers, `#` starts
//! a comment. Row `i`, column `j` non-zero means an edge from node `i` to
//! node `j`. Nodes are labelled `0..n`.

use crate::graph::{NodeId, WeightedGraph};
use crate::{Error, Result};
use std::fs;
use std::path::Path;

/// Build a graph from adjacency-matrix text
///
/// With `weighted`, non-zero entries become edge weights; otherwise edges
/// are added without a weight. For undirected graphs a later entry for the
/// same pair replaces the earlier one. Weighted entries must be finite.
pub fn parse_adjacency_matrix(text: &str, directed: bool, weighted: bool) -> Result<WeightedGraph> {
    let mut rows = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        let content = line.split('#').next().unwrap_or_default().trim();
        if content.is_empty() {
            continue;
        }
        let row = content
            .split_whitespace()
            .map(|value| {
                value.parse::<f64>().map_err(|_| {
                    Error::invalid_input(format!(
                        "line {}: '{}' is not a number",
                        line_no + 1,
                        value
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        rows.push(row);
    }

    let n = rows.len();
    if let Some((i, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != n) {
        return Err(Error::invalid_input(format!(
            "matrix must be square: row {} has {} values, expected {}",
            i + 1,
            row.len(),
            n
        )));
    }

    let mut graph = WeightedGraph::new(directed);
    for node in 0..n {
        graph.add_node(node as NodeId);
    }
    for (i, row) in rows.iter().enumerate() {
        for (j, &value) in row.iter().enumerate() {
            if value != 0.0 {
                graph.add_edge(i as NodeId, j as NodeId, weighted.then_some(value))?;
            }
        }
    }
    Ok(graph)
}

/// Read a graph from an adjacency-matrix file
pub fn read_adjacency_matrix(
    path: impl AsRef<Path>,
    directed: bool,
    weighted: bool,
) -> Result<WeightedGraph> {
    let text = fs::read_to_string(path)?;
    parse_adjacency_matrix(&text, directed, weighted)
}

/// Dense matrix of effective edge weights in node order (0 = no edge)
pub fn adjacency_matrix(graph: &WeightedGraph) -> Vec<Vec<f64>> {
    let n = graph.node_count();
    let mut matrix = vec![vec![0.0; n]; n];
    for edge in graph.edges() {
        let (Some(u), Some(v)) = (graph.index_of(edge.from), graph.index_of(edge.to)) else {
            continue;
        };
        matrix[u][v] = edge.effective_weight();
        if !graph.is_directed() {
            matrix[v][u] = edge.effective_weight();
        }
    }
    matrix
}

/// Render the adjacency matrix as right-aligned text, one row per line
pub fn format_adjacency_matrix(graph: &WeightedGraph) -> String {
    let cells: Vec<Vec<String>> = adjacency_matrix(graph)
        .iter()
        .map(|row| row.iter().map(|value| value.to_string()).collect())
        .collect();
    let width = cells.iter().flatten().map(String::len).max().unwrap_or(1);

    let mut out = String::new();
    for row in &cells {
        let line: Vec<String> = row.iter().map(|cell| format!("{cell:>width$}")).collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}

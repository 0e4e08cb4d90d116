use approx::assert_relative_eq;
use pathbench_core::{
    Algorithm, Error, Outcome, Selection, WeightedGraph, all_pairs_report, compare_all,
    run_algorithm, run_selection,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("pathbench_core=debug")
        .try_init();
}

/// 0 -> 1 -> 2 -> 3 costs 4; the 0 -> 2 shortcut costs 5 on its own
fn four_node_graph() -> WeightedGraph {
    WeightedGraph::build(
        [0, 1, 2, 3],
        [
            (0, 1, Some(1.0)),
            (1, 2, Some(2.0)),
            (0, 2, Some(5.0)),
            (2, 3, Some(1.0)),
        ],
        true,
    )
    .unwrap()
}

// ============================================================================
// SINGLE ALGORITHM RUNS
// ============================================================================

#[test]
fn test_every_algorithm_finds_cheapest_path() {
    init_tracing();
    let mut graph = four_node_graph();

    for algorithm in Algorithm::ALL {
        let report = run_algorithm(&mut graph, algorithm, 0, 3).unwrap();
        assert_eq!(report.algorithm, algorithm);
        assert_eq!(report.outcome, Outcome::Found, "{algorithm}");
        assert_eq!(report.path, Some(vec![0, 1, 2, 3]), "{algorithm}");
        assert_relative_eq!(report.cost, 4.0);
    }
}

#[test]
fn test_report_operation_estimates() {
    let mut graph = four_node_graph();

    let dijkstra = run_algorithm(&mut graph, Algorithm::PriorityQueueDijkstra, 0, 3).unwrap();
    // (V + E) log2 V = 8 * 2
    assert_relative_eq!(dijkstra.theoretical_ops.unwrap(), 16.0);
    let per_op = dijkstra.time_per_op.unwrap();
    assert_relative_eq!(per_op, dijkstra.elapsed_secs() / 16.0);

    let bellman_ford = run_algorithm(&mut graph, Algorithm::BellmanFord, 0, 3).unwrap();
    assert_relative_eq!(bellman_ford.theoretical_ops.unwrap(), 16.0);

    let floyd_warshall = run_algorithm(&mut graph, Algorithm::FloydWarshall, 0, 3).unwrap();
    assert_relative_eq!(floyd_warshall.theoretical_ops.unwrap(), 64.0);
}

#[test]
fn test_source_equals_target() {
    let mut graph = four_node_graph();
    for report in compare_all(&mut graph, 2, 2).unwrap() {
        assert_eq!(report.path, Some(vec![2]), "{}", report.algorithm);
        assert_eq!(report.cost, 0.0);
    }
}

#[test]
fn test_single_node_graph_has_no_dijkstra_estimate() {
    let mut graph = WeightedGraph::build([9], [], true).unwrap();
    let report = run_algorithm(&mut graph, Algorithm::Dijkstra, 9, 9).unwrap();
    assert_eq!(report.path, Some(vec![9]));
    assert!(report.theoretical_ops.is_none());
    assert!(report.time_per_op.is_none());
}

#[test]
fn test_unknown_node_fails_the_call() {
    let mut graph = four_node_graph();
    assert!(matches!(
        run_algorithm(&mut graph, Algorithm::Dijkstra, 0, 42),
        Err(Error::NodeNotFound(42))
    ));
    assert!(matches!(
        compare_all(&mut graph, 42, 0),
        Err(Error::NodeNotFound(42))
    ));
}

// ============================================================================
// REACHABILITY
// ============================================================================

#[test]
fn test_edgeless_graph_reports_no_path() {
    init_tracing();
    let mut graph = WeightedGraph::build([0, 1, 2], [], true).unwrap();

    let reports = compare_all(&mut graph, 0, 2).unwrap();
    assert_eq!(reports.len(), 4);
    for report in &reports {
        assert_eq!(report.path, None, "{}", report.algorithm);
        assert!(report.cost.is_infinite());
        assert_eq!(report.outcome, Outcome::Unreachable);
        assert!(!report.is_found());
    }
}

#[test]
fn test_unreachable_pair_skips_timed_single_source_runs() {
    let mut graph = WeightedGraph::build([0, 1, 2, 3], [(0, 1, Some(2.0))], false).unwrap();

    let reports = compare_all(&mut graph, 0, 3).unwrap();
    for report in &reports[..3] {
        assert!(report.algorithm.is_single_source());
        assert!(report.elapsed.is_zero());
        assert!(report.time_per_op.is_none());
    }
    assert_eq!(reports[3].algorithm, Algorithm::FloydWarshall);
    assert_eq!(reports[3].outcome, Outcome::Unreachable);
}

#[test]
fn test_direction_matters() {
    let mut graph = four_node_graph();
    let report = run_algorithm(&mut graph, Algorithm::PriorityQueueDijkstra, 3, 0).unwrap();
    assert_eq!(report.outcome, Outcome::Unreachable);
}

// ============================================================================
// COMPARISON
// ============================================================================

#[test]
fn test_compare_all_runs_in_fixed_order() {
    let mut graph = four_node_graph();
    let reports = compare_all(&mut graph, 0, 3).unwrap();
    let order: Vec<Algorithm> = reports.iter().map(|r| r.algorithm).collect();
    assert_eq!(order, Algorithm::ALL.to_vec());
}

#[test]
fn test_run_selection_single() {
    let mut graph = four_node_graph();
    let selection: Selection = "floyd-warshall".parse().unwrap();
    let reports = run_selection(&mut graph, selection, 0, 3).unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].algorithm, Algorithm::FloydWarshall);
}

#[test]
fn test_repeated_runs_agree() {
    let mut graph = four_node_graph();
    let first = compare_all(&mut graph, 0, 3).unwrap();
    let second = compare_all(&mut graph, 0, 3).unwrap();
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.path, b.path);
        assert_eq!(a.cost, b.cost);
        assert_eq!(a.outcome, b.outcome);
    }
}

#[test]
fn test_negative_edge_fails_dijkstra_only() {
    init_tracing();
    let mut graph = WeightedGraph::build(
        [0, 1, 2],
        [(0, 1, Some(4.0)), (0, 2, Some(5.0)), (2, 1, Some(-3.0))],
        true,
    )
    .unwrap();

    let reports = compare_all(&mut graph, 0, 1).unwrap();
    assert!(matches!(reports[0].outcome, Outcome::Failed { .. }));
    assert!(matches!(reports[1].outcome, Outcome::Failed { .. }));
    for report in &reports[2..] {
        assert_eq!(report.path, Some(vec![0, 2, 1]), "{}", report.algorithm);
        assert_relative_eq!(report.cost, 2.0);
    }
}

#[test]
fn test_negative_cycle_fails_every_algorithm() {
    let mut graph = WeightedGraph::build(
        [0, 1, 2],
        [(0, 1, Some(1.0)), (1, 2, Some(-2.0)), (2, 1, Some(1.0))],
        true,
    )
    .unwrap();

    let reports = compare_all(&mut graph, 0, 2).unwrap();
    for report in &reports {
        assert!(
            matches!(report.outcome, Outcome::Failed { .. }),
            "{}",
            report.algorithm
        );
        assert!(report.path.is_none());
    }
}

// ============================================================================
// WEIGHT SYNTHESIS
// ============================================================================

#[test]
fn test_unweighted_graph_counts_hops_and_is_restored() {
    init_tracing();
    let mut graph = WeightedGraph::build(
        [],
        [(0, 1, None), (1, 2, None), (2, 3, None), (0, 3, None)],
        false,
    )
    .unwrap();

    let reports = compare_all(&mut graph, 0, 2).unwrap();
    for report in &reports {
        assert_relative_eq!(report.cost, 2.0);
        assert_eq!(report.path.as_ref().map(Vec::len), Some(3));
    }

    assert!(!graph.is_weighted());
    assert!(graph.edges().iter().all(|edge| edge.weight.is_none()));
}

#[test]
fn test_weights_removed_when_call_fails() {
    let mut graph = WeightedGraph::build([], [(0, 1, None)], true).unwrap();
    assert!(run_algorithm(&mut graph, Algorithm::Dijkstra, 0, 5).is_err());
    assert!(graph.edges().iter().all(|edge| edge.weight.is_none()));
}

#[test]
fn test_partially_weighted_graph_is_left_alone() {
    let mut graph = WeightedGraph::build([], [(0, 1, Some(3.0)), (1, 2, None)], true).unwrap();

    let report = run_algorithm(&mut graph, Algorithm::BellmanFord, 0, 2).unwrap();
    assert_relative_eq!(report.cost, 4.0);
    assert_eq!(graph.edge(1, 2).unwrap().weight, None);
    assert_eq!(graph.edge(0, 1).unwrap().weight, Some(3.0));
}

// ============================================================================
// ALL PAIRS
// ============================================================================

#[test]
fn test_all_pairs_report() {
    let mut graph = four_node_graph();
    let report = all_pairs_report(&mut graph).unwrap();

    assert_relative_eq!(report.theoretical_ops.unwrap(), 64.0);
    assert_relative_eq!(report.matrix.distance(0, 3).unwrap(), 4.0);
    assert!(report.matrix.distance(3, 0).unwrap().is_infinite());
    assert_eq!(
        report.matrix.path(0, 3).unwrap(),
        Some(vec![0, 1, 2, 3])
    );
}

#[test]
fn test_report_serializes_status_and_seconds() {
    let mut graph = four_node_graph();
    let report = run_algorithm(&mut graph, Algorithm::PriorityQueueDijkstra, 0, 3).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["algorithm"], "priority-queue-dijkstra");
    assert_eq!(json["outcome"]["status"], "found");
    assert_eq!(json["path"], serde_json::json!([0, 1, 2, 3]));
    assert!(json["elapsed_secs"].is_f64());
}

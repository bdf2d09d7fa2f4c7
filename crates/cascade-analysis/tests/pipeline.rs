//! End-to-end experiment tests: graph file in, result files out.

use std::fs;
use std::io::Write;

use cascade_analysis::output::{COMPARISON_FILE, SENSITIVITY_IC_FILE, SENSITIVITY_LT_FILE};
use cascade_analysis::{
    load_graph, read_jsonl, run_experiment, AnalysisConfig, RecordWriter, RunSummary,
};
use cascade_core::rng::seeded;
use cascade_core::{InfluenceGraph, ProbabilityMode, SeedSelection, ThresholdMode};
use cascade_records::{DiffusionModel, ModelParams, ResultRecord, SensitivityRecord};

const GRAPH: &str = r#"{
    "directed": true,
    "nodes": ["A", "B", "C", "D", "E", "F"],
    "edges": [["A", "B"], ["A", "C"], ["B", "D"], ["C", "D"], ["D", "E"], ["E", "F"], ["F", "A"]]
}"#;

fn config() -> AnalysisConfig {
    let mut config = AnalysisConfig::default();
    config.ic.seed_selection = SeedSelection::MaxDegree;
    config.ic.seed_count = 2;
    config.ic.probability = ProbabilityMode::Fixed { value: 1.0 };
    config.lt.seed_count = 2;
    config.lt.threshold_mode = ThresholdMode::Fixed { value: 0.5 };
    config.sensitivity.probabilities = vec![0.0, 1.0, 1.5];
    config
}

#[test]
fn test_graph_file_to_result_files() {
    let mut graph_file = tempfile::NamedTempFile::new().unwrap();
    graph_file.write_all(GRAPH.as_bytes()).unwrap();
    let graph = load_graph(graph_file.path()).unwrap();
    assert_eq!(graph.node_count(), 6);

    let report = run_experiment(&graph, &config(), &mut seeded(42)).unwrap();

    let out = tempfile::tempdir().unwrap();
    let mut writer = RecordWriter::new(out.path()).unwrap();
    let summary = writer.write_report(&report).unwrap();

    // A and D are the only degree-3 nodes.
    assert_eq!(summary.ic_seeds, vec!["A", "D"]);
    assert_eq!(summary.ic_label, "IC_degree_p=1");
    assert_eq!(summary.lt_label, "LT_k2_fixed_0.5");
    assert_eq!(summary.sweep_failures, 1);

    let comparison: Vec<ResultRecord> = read_jsonl(&out.path().join(COMPARISON_FILE)).unwrap();
    assert_eq!(comparison, report.comparison);
    assert_eq!(comparison.len(), 4);

    // The graph is one strongly connected component, so p = 1 reaches everything.
    for row in comparison.iter().filter(|r| r.model == DiffusionModel::IndependentCascade) {
        assert_eq!(row.activated_count, 6);
        assert_eq!(row.params, ModelParams::Ic { p: 1.0 });
    }
    let lt_rows: Vec<_> = comparison
        .iter()
        .filter(|r| r.model == DiffusionModel::LinearThreshold)
        .collect();
    assert_eq!(lt_rows.len(), 2);
    assert_eq!(lt_rows[0].activated_count, lt_rows[1].activated_count);
    assert_eq!(lt_rows[0].round_count, lt_rows[1].round_count);

    let ic_sweep: Vec<SensitivityRecord> =
        read_jsonl(&out.path().join(SENSITIVITY_IC_FILE)).unwrap();
    assert_eq!(ic_sweep.len(), 2);
    assert_eq!(ic_sweep[0].activated_count, 1);
    assert_eq!(ic_sweep[1].activated_count, 6);

    let lt_sweep: Vec<SensitivityRecord> =
        read_jsonl(&out.path().join(SENSITIVITY_LT_FILE)).unwrap();
    assert_eq!(lt_sweep.len(), 5);
    assert!(lt_sweep.windows(2).all(|w| w[0].activated_count >= w[1].activated_count));

    let written: RunSummary =
        serde_json::from_str(&fs::read_to_string(out.path().join("summary.json")).unwrap())
            .unwrap();
    assert_eq!(written, summary);
}

#[test]
fn test_same_seed_same_files() {
    let graph = cascade_analysis::parse_graph(GRAPH).unwrap();
    let mut config = AnalysisConfig::default();
    config.ic.seed_count = 3;
    config.lt.seed_count = 3;

    let dirs = [tempfile::tempdir().unwrap(), tempfile::tempdir().unwrap()];
    for dir in &dirs {
        let report = run_experiment(&graph, &config, &mut seeded(config.rng_seed)).unwrap();
        RecordWriter::new(dir.path())
            .unwrap()
            .write_report(&report)
            .unwrap();
    }

    for file in [COMPARISON_FILE, SENSITIVITY_IC_FILE, SENSITIVITY_LT_FILE, "summary.json"] {
        assert_eq!(
            fs::read_to_string(dirs[0].path().join(file)).unwrap(),
            fs::read_to_string(dirs[1].path().join(file)).unwrap(),
            "{} differs",
            file
        );
    }
}

#[test]
fn test_config_file_drives_experiment() {
    let mut config_file = tempfile::NamedTempFile::new().unwrap();
    write!(
        config_file,
        r#"
        rng_seed = 9

        [ic]
        seed_count = 1
        probability = {{ mode = "fixed", value = 0.0 }}

        [lt]
        seed_count = 1

        [sensitivity]
        probabilities = [0.0]
        thresholds = [1.0]
        "#
    )
    .unwrap();

    let config = AnalysisConfig::from_file(config_file.path()).unwrap();
    let graph = cascade_analysis::parse_graph(GRAPH).unwrap();
    let report = run_experiment(&graph, &config, &mut seeded(config.rng_seed)).unwrap();

    assert_eq!(report.comparison[0].activated_count, 1);
    assert_eq!(report.ic_sensitivity.records[0].activated_count, 1);
    // A single active neighbor out of two or more never reaches threshold 1.
    assert_eq!(report.lt_sensitivity.records[0].activated_count, 1);
}

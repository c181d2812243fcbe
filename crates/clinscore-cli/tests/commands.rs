use assert_cmd::Command;
use clap::Parser;
use clinscore_cli::cli::{Cli, OutputFormat};
use clinscore_cli::config::{ClinscoreConfig, load_config};
use clinscore_cli::run;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

fn run_args(args: &[&str]) -> eyre::Result<String> {
    let cli = Cli::try_parse_from(std::iter::once("clinscore").chain(args.iter().copied()))?;
    let mut out = Vec::new();
    run(&cli, &ClinscoreConfig::default(), &mut out)?;
    Ok(String::from_utf8(out)?)
}

#[test]
fn list_filters_by_specialty() {
    let out = run_args(&["list", "--specialty", "pulmonology", "--format", "json"]).unwrap();
    let listed: Value = serde_json::from_str(&out).unwrap();
    let ids: Vec<&str> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["psi_port", "gold_copd", "expected_peak_flow", "decaf"]);
}

#[test]
fn list_text_has_one_line_per_calculator() {
    let out = run_args(&["list"]).unwrap();
    assert_eq!(out.lines().count(), clinscore_calculators::all_calculators().len());
    assert!(out.lines().any(|l| l.starts_with("news_2 ")));
}

#[test]
fn show_includes_parameters_and_bands() {
    let out = run_args(&["show", "mean_arterial_pressure", "--format", "json"]).unwrap();
    let detail: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(detail["parameters"], json!(["systolic_bp", "diastolic_bp"]));
    assert_eq!(detail["bands"][0]["min"], Value::Null);
    assert_eq!(detail["bands"][2]["stage"], json!("Normal"));
}

#[test]
fn calc_text_report() {
    let out = run_args(&["calc", "mean_arterial_pressure", "systolic_bp=120", "diastolic_bp=80"])
        .unwrap();
    assert!(out.contains("Result: 93.3 mmHg"));
    assert!(out.contains("Stage:  Normal"));
}

#[test]
fn calc_json_file_with_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("map.json");
    std::fs::write(&path, r#"{"systolic_bp": 200, "diastolic_bp": 80}"#).unwrap();

    let out = run_args(&[
        "calc",
        "mean_arterial_pressure",
        "--json",
        path.to_str().unwrap(),
        "systolic_bp=120",
        "--format",
        "json",
    ])
    .unwrap();
    let assessment: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(assessment["result"], json!(93.3));
    assert_eq!(assessment["stage"], json!("Normal"));
}

#[test]
fn calc_reports_invalid_parameter() {
    let err = run_args(&["calc", "mean_arterial_pressure", "systolic_bp=500", "diastolic_bp=80"])
        .unwrap_err();
    let chain = format!("{err:#}");
    assert!(chain.contains("invalid parameter 'systolic_bp'"));
}

#[test]
fn calc_unknown_calculator() {
    let err = run_args(&["calc", "no_such_score"]).unwrap_err();
    assert!(err.to_string().contains("unknown calculator: no_such_score"));
}

#[test]
fn config_init_refuses_overwrite_without_force() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");
    let path_arg = path.to_str().unwrap();

    Command::cargo_bin("clinscore")
        .unwrap()
        .args(["--config", path_arg, "config", "init"])
        .assert()
        .success();
    let config = load_config(&path).unwrap();
    assert_eq!(config.config_version, 1);
    assert_eq!(config.output_format, OutputFormat::Text);
    assert_eq!(config.log_filter, "warn");

    Command::cargo_bin("clinscore")
        .unwrap()
        .args(["--config", path_arg, "config", "init"])
        .assert()
        .failure();

    Command::cargo_bin("clinscore")
        .unwrap()
        .args(["--config", path_arg, "config", "init", "--force"])
        .assert()
        .success();
}

#[test]
fn configured_output_format_is_the_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{"config_version": 1, "output_format": "json", "created_at": "2024-01-01T00:00:00Z"}"#,
    )
    .unwrap();

    let output = Command::cargo_bin("clinscore")
        .unwrap()
        .env("CLINSCORE_CONFIG", &path)
        .args(["calc", "ottawa_knee_rule"])
        .args([
            "age_55_or_older=no",
            "isolated_patellar_tenderness=no",
            "fibular_head_tenderness=no",
            "unable_to_flex_90=no",
            "unable_to_bear_weight=no",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let assessment: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(assessment["result"], json!("no_xray_needed"));
}

#[test]
fn binary_exits_nonzero_on_bad_input() {
    Command::cargo_bin("clinscore")
        .unwrap()
        .env("CLINSCORE_CONFIG", "/nonexistent/clinscore/config.json")
        .args(["calc", "mean_arterial_pressure", "systolic_bp=abc", "diastolic_bp=80"])
        .assert()
        .failure();
}

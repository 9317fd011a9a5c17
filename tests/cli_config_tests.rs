//! End-to-end tests for `typescale config` commands.

use std::fs;
use tempfile::TempDir;

mod fixtures;
use fixtures::*;

// ============================================================================
// Show Command Tests
// ============================================================================

#[test]
fn test_config_show_default() {
    let output = run(&["config", "show"]);
    assert_exit(&output, 0);

    let text = stdout(&output);
    assert!(text.contains("Scale:"));
    assert!(text.contains("Viewport:"));
    assert!(text.contains("Prefix:"));
}

#[test]
fn test_config_show_json_schema() {
    let output = run(&["config", "show", "--json"]);
    assert_exit(&output, 0);

    let json: serde_json::Value =
        serde_json::from_str(&stdout(&output)).expect("Should parse JSON output");
    assert_eq!(json["scale"]["num_steps"], 8);
    assert_eq!(json["scale"]["mode"], "curve");
    assert_eq!(json["scale"]["curve"], "linear");
    assert_eq!(json["viewport"]["min_viewport"].as_f64(), Some(320.0));
    assert_eq!(json["output"]["prefix"], "fs");
    assert_eq!(json["ui"]["theme"], "auto");
}

#[test]
fn test_config_show_rejects_invalid_file() {
    let dir = TempDir::new().unwrap();
    write_config(dir.path(), "[viewport]\nmin_viewport = 900\nmax_viewport = 300\n");

    let output = run_in(&["config", "show"], dir.path());
    assert_exit(&output, 1);
}

// ============================================================================
// Set Command Tests
// ============================================================================

#[test]
fn test_config_set_requires_option() {
    let output = run(&["config", "set"]);
    assert_exit(&output, 1);
}

#[test]
fn test_config_set_persists_and_applies() {
    let dir = TempDir::new().unwrap();

    let output = run_in(
        &[
            "config",
            "set",
            "--base-size",
            "1.125",
            "--curve",
            "logarithmic",
            "--prefix",
            "text",
            "--max-viewport",
            "1920",
        ],
        dir.path(),
    );
    assert_exit(&output, 0);

    let saved = fs::read_to_string(dir.path().join("config.toml")).expect("config written");
    assert!(saved.contains("base_size = 1.125"));
    assert!(saved.contains("curve = \"logarithmic\""));

    // Later commands pick up the saved defaults
    let output = run_in(&["generate", "--format", "json"], dir.path());
    assert_exit(&output, 0);
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["prefix"], "text");
    assert_eq!(json["viewport"]["max_viewport"].as_f64(), Some(1920.0));
    assert!((json["steps"][3]["size"].as_f64().unwrap() - 1.125).abs() < 1e-12);
}

#[test]
fn test_config_set_rejects_invalid_values() {
    let dir = TempDir::new().unwrap();

    let output = run_in(&["config", "set", "--theme", "neon"], dir.path());
    assert_exit(&output, 1);

    let output = run_in(&["config", "set", "--divisor", "0"], dir.path());
    assert_exit(&output, 1);

    assert!(!dir.path().join("config.toml").exists());
}

#[test]
fn test_config_set_theme() {
    let dir = TempDir::new().unwrap();

    let output = run_in(&["config", "set", "--theme", "light"], dir.path());
    assert_exit(&output, 0);

    let output = run_in(&["config", "show", "--json"], dir.path());
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["ui"]["theme"], "light");
}

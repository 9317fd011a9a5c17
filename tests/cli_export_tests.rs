//! End-to-end tests for `typescale export`.

use std::fs;
use tempfile::TempDir;

mod fixtures;
use fixtures::*;

#[test]
fn test_export_css_to_path() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("nested").join("scale.css");
    let target_str = target.to_string_lossy().to_string();

    let output = run(&["export", "--base-size", "16", "-o", &target_str]);
    assert_exit(&output, 0);
    assert!(stdout(&output).contains("Exported 8 steps"));

    let css = fs::read_to_string(&target).expect("export should write the file");
    assert!(css.starts_with(":root {"));
    assert!(css.contains("\t--fs-base: clamp(16.000rem, calc("));
}

#[test]
fn test_export_json_to_path() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("tokens.json");
    let target_str = target.to_string_lossy().to_string();

    let output = run(&["export", "--format", "json", "--prefix", "type", "-o", &target_str]);
    assert_exit(&output, 0);

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&target).unwrap()).unwrap();
    assert_eq!(json["prefix"], "type");
    assert_eq!(json["steps"][0]["property"], "--type-xs");
}

#[test]
fn test_export_default_name_in_export_dir() {
    let config_dir = TempDir::new().unwrap();
    let export_dir = TempDir::new().unwrap();
    write_config(
        config_dir.path(),
        &format!(
            "[output]\nexport_dir = \"{}\"\n",
            export_dir.path().display().to_string().replace('\\', "\\\\")
        ),
    );

    let output = run_in(&["export"], config_dir.path());
    assert_exit(&output, 0);

    let files: Vec<String> = fs::read_dir(export_dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(files.len(), 1);
    assert!(files[0].starts_with("fs_scale_"));
    assert!(files[0].ends_with(".css"));
}

#[test]
fn test_export_validation_error_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("scale.css");
    let target_str = target.to_string_lossy().to_string();

    let output = run(&["export", "--intensity", "0", "--curve", "exponential", "-o", &target_str]);
    assert_exit(&output, 1);
    assert!(!target.exists());
}

#[test]
fn test_export_unwritable_path_is_io_error() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("not_a_dir");
    fs::write(&blocker, "file").unwrap();
    let target = blocker.join("scale.css");
    let target_str = target.to_string_lossy().to_string();

    let output = run(&["export", "-o", &target_str]);
    assert_exit(&output, 2);
    assert!(stderr(&output).contains("Error:"));
}

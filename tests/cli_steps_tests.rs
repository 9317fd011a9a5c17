//! End-to-end tests for `typescale steps`.

mod fixtures;
use fixtures::*;

#[test]
fn test_steps_table() {
    let output = run(&["steps", "--base-size", "16"]);
    assert_exit(&output, 0);

    let text = stdout(&output);
    for label in ["xs", "sm", "md", "base", "lg", "xl", "2xl", "3xl"] {
        assert!(
            text.lines().any(|l| l.starts_with(label)),
            "missing {label} in:\n{text}"
        );
    }
    assert!(text.contains("Step size:"));
    assert!(!text.contains("4xl"));
}

#[test]
fn test_steps_json() {
    let output = run(&["steps", "--steps", "14", "--json"]);
    assert_exit(&output, 0);

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let steps = json["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 14);
    assert_eq!(steps[13]["label"], "9xl");
    assert_eq!(json["mode"], "curve");

    // Pivot equals the base size and both zones are monotonic
    let sizes: Vec<f64> = steps.iter().map(|s| s["size"].as_f64().unwrap()).collect();
    assert!((sizes[3] - 1.0).abs() < 1e-12);
    assert!(sizes.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_steps_clamps_count() {
    let output = run(&["steps", "--steps", "40", "--json"]);
    assert_exit(&output, 0);
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["steps"].as_array().unwrap().len(), 14);

    let output = run(&["steps", "--steps", "1", "--json"]);
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["steps"].as_array().unwrap().len(), 5);
}

#[test]
fn test_steps_proportional_has_no_step_size() {
    let output = run(&["steps", "--mode", "proportional", "--json"]);
    assert_exit(&output, 0);

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert!(json.get("step_size").is_none());
    assert_eq!(json["mode"], "proportional");
    assert_eq!(json["steps"][5]["size"].as_f64(), Some(1.25));
}

#[test]
fn test_steps_marks_overrides() {
    let output = run(&["steps", "--override", "xl=2.5"]);
    assert_exit(&output, 0);
    assert!(stdout(&output).contains("* manual override"));
}

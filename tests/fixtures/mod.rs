//! Shared helpers for end-to-end CLI tests.
#![allow(dead_code)] // Not every test binary uses every helper

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the typescale binary
pub fn typescale_bin() -> String {
    std::env::var("CARGO_BIN_EXE_typescale")
        .unwrap_or_else(|_| "target/release/typescale".to_string())
}

/// Creates a Command whose config directory is isolated in `config_dir`.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(typescale_bin());
    cmd.env("TYPESCALE_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Runs the binary with a fresh, empty config directory.
pub fn run(args: &[&str]) -> Output {
    let config_dir = TempDir::new().expect("Failed to create temp dir");
    run_in(args, config_dir.path())
}

/// Runs the binary against an existing config directory.
pub fn run_in(args: &[&str], config_dir: &Path) -> Output {
    isolated_command(args, config_dir)
        .output()
        .expect("Failed to execute command")
}

/// Writes `content` as the config file in `config_dir`.
pub fn write_config(config_dir: &Path, content: &str) {
    fs::create_dir_all(config_dir).expect("Failed to create config dir");
    fs::write(config_dir.join("config.toml"), content).expect("Failed to write config");
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Asserts the exit code, printing stderr on mismatch.
pub fn assert_exit(output: &Output, code: i32) {
    assert_eq!(
        output.status.code(),
        Some(code),
        "unexpected exit code. stderr: {}",
        stderr(output)
    );
}

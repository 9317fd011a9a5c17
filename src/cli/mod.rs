//! CLI command handlers for Typescale.
//!
//! This module provides headless, scriptable access to the scale engine
//! for automation, build pipelines, and CI integration.

pub mod clamp;
pub mod common;
pub mod config;
pub mod export;
pub mod generate;
pub mod scale_args;
pub mod serve;
pub mod steps;

// Re-export types used by main.rs and tests
pub use clamp::ClampArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use export::ExportArgs;
pub use generate::GenerateArgs;
pub use scale_args::{ScaleArgs, StepOverride, ViewportArgs};
pub use serve::ServeArgs;
pub use steps::StepsArgs;

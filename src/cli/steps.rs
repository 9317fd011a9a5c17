//! Steps command: show the raw size sequence.

use crate::cli::common::{CliError, CliResult};
use crate::cli::scale_args::ScaleArgs;
use crate::config::Config;
use crate::scale::ScaleState;
use clap::Args;
use serde::Serialize;

/// Show the size of every step
#[derive(Debug, Clone, Args)]
pub struct StepsArgs {
    #[command(flatten)]
    pub scale: ScaleArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON-serializable step listing
#[derive(Serialize, Debug)]
struct StepsOutput {
    mode: String,
    base_size: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    step_size: Option<f64>,
    steps: Vec<StepOutput>,
}

#[derive(Serialize, Debug)]
struct StepOutput {
    index: usize,
    label: &'static str,
    size: f64,
    overridden: bool,
}

impl StepsArgs {
    /// Execute the steps command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load().unwrap_or_default();
        let scale = self.scale.resolve(&config);
        let state = self.scale.build_state(&scale)?;

        if self.json {
            let output = StepsOutput {
                mode: scale.mode.to_string(),
                base_size: scale.base_size,
                step_size: state.step_size(),
                steps: step_rows(&state),
            };
            let json = serde_json::to_string_pretty(&output)
                .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
            println!("{json}");
        } else {
            print!("{}", format_table(&state));
        }

        Ok(())
    }
}

fn step_rows(state: &ScaleState) -> Vec<StepOutput> {
    state
        .steps()
        .enumerate()
        .map(|(index, (label, size))| StepOutput {
            index,
            label,
            size,
            overridden: state.is_overridden(index),
        })
        .collect()
}

/// Human-readable table of steps
fn format_table(state: &ScaleState) -> String {
    let mut out = String::from("Step    Size (rem)\n------  ----------\n");
    for row in step_rows(state) {
        let marker = if row.overridden { "  *" } else { "" };
        out.push_str(&format!("{:<6}  {:>10.3}{}\n", row.label, row.size, marker));
    }
    if let Some(step) = state.step_size() {
        out.push_str(&format!("\nStep size: {step:.3}\n"));
    }
    if !state.overrides().is_empty() {
        out.push_str("* manual override\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::scale_config::ScaleConfig;

    #[test]
    fn test_format_table() {
        let config = ScaleConfig {
            base_size: 16.0,
            ..ScaleConfig::default()
        };
        let state = ScaleState::from_config(&config)
            .unwrap()
            .with_override(0, 9.0)
            .unwrap();
        let table = format_table(&state);

        assert!(table.contains("base        16.000"));
        assert!(table.contains("xs           9.000  *"));
        assert!(table.contains("Step size:"));
        assert!(table.contains("* manual override"));
    }
}

//! Clamp command: derive a single responsive expression.

use crate::cli::common::{CliError, CliResult};
use crate::cli::scale_args::ViewportArgs;
use crate::config::Config;
use crate::scale::{derive_clamp, ClampExpression};
use clap::Args;
use serde::Serialize;

/// Derive the clamp() expression for one size
#[derive(Debug, Clone, Args)]
pub struct ClampArgs {
    /// Size at the narrowest viewport, in rem
    #[arg(value_name = "REM", allow_negative_numbers = true)]
    pub value: f64,

    /// Size at the widest viewport before growth (defaults to VALUE)
    #[arg(long, value_name = "REM", allow_negative_numbers = true)]
    pub max_value: Option<f64>,

    #[command(flatten)]
    pub viewport: ViewportArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize, Debug)]
struct ClampOutput {
    expression: String,
    #[serde(flatten)]
    parts: ClampExpression,
}

impl ClampArgs {
    /// Execute the clamp command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load().unwrap_or_default();
        let clamp = self.derive(&config)?;

        if self.json {
            let output = ClampOutput {
                expression: clamp.to_string(),
                parts: clamp,
            };
            let json = serde_json::to_string_pretty(&output)
                .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
            println!("{json}");
        } else {
            println!("{clamp}");
        }

        Ok(())
    }

    /// Derives the expression using configured viewport defaults.
    pub fn derive(&self, config: &Config) -> CliResult<ClampExpression> {
        let viewport = self.viewport.resolve(config.viewport);
        let max_value = self.max_value.unwrap_or(self.value);
        Ok(derive_clamp(self.value, max_value, &viewport)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_uses_value_for_both_anchors() {
        let args = ClampArgs {
            value: 10.0,
            max_value: None,
            viewport: ViewportArgs::default(),
            json: false,
        };
        let clamp = args.derive(&Config::new()).unwrap();
        assert_eq!(
            clamp.to_string(),
            "clamp(10.000rem, calc(2.857vw + 9.429rem), 12.000rem)"
        );
    }

    #[test]
    fn test_derive_rejects_degenerate_viewport() {
        let args = ClampArgs {
            value: 10.0,
            max_value: None,
            viewport: ViewportArgs {
                min_viewport: Some(320.0),
                max_viewport: Some(320.0),
                ..ViewportArgs::default()
            },
            json: false,
        };
        let err = args.derive(&Config::new()).unwrap_err();
        assert!(err.message.contains("degenerate viewport"));
    }
}

//! Scale parameters shared by every command that builds a scale.
//!
//! Flags left unset fall back to the configuration file.

use clap::Args;

use super::common::CliResult;
use crate::config::Config;
use crate::models::curve::{CurveType, ScaleMode};
use crate::models::scale_config::ScaleConfig;
use crate::models::step::Step;
use crate::models::viewport::ViewportParams;
use crate::scale::ScaleState;

/// Viewport flags.
#[derive(Debug, Clone, Default, Args)]
pub struct ViewportArgs {
    /// Viewport width (px) where the minimum size applies
    #[arg(long, value_name = "PX")]
    pub min_viewport: Option<f64>,

    /// Viewport width (px) where the maximum size applies
    #[arg(long, value_name = "PX")]
    pub max_viewport: Option<f64>,

    /// Pixels per rem
    #[arg(long, value_name = "PX")]
    pub divisor: Option<f64>,

    /// Extra growth at the widest viewport (0.2 = 20%)
    #[arg(long, value_name = "FRACTION", allow_negative_numbers = true)]
    pub growth: Option<f64>,
}

impl ViewportArgs {
    /// Applies the given flags on top of `defaults`.
    #[must_use]
    pub fn resolve(&self, defaults: ViewportParams) -> ViewportParams {
        ViewportParams {
            min_viewport: self.min_viewport.unwrap_or(defaults.min_viewport),
            max_viewport: self.max_viewport.unwrap_or(defaults.max_viewport),
            divisor: self.divisor.unwrap_or(defaults.divisor),
            growth: self.growth.unwrap_or(defaults.growth),
        }
    }
}

/// Generation and output flags.
#[derive(Debug, Clone, Default, Args)]
pub struct ScaleArgs {
    /// Size of the `base` step, in rem
    #[arg(short, long, value_name = "REM", allow_negative_numbers = true)]
    pub base_size: Option<f64>,

    /// Number of steps (5-14)
    #[arg(short, long, value_name = "N")]
    pub steps: Option<usize>,

    /// Generation mode: curve or proportional
    #[arg(short, long, value_name = "MODE")]
    pub mode: Option<ScaleMode>,

    /// Curve type: linear, exponential, or logarithmic
    #[arg(short, long, value_name = "CURVE")]
    pub curve: Option<CurveType>,

    /// Curve intensity (exponent of the exponential curve)
    #[arg(short, long, value_name = "X", allow_negative_numbers = true)]
    pub intensity: Option<f64>,

    /// Custom property prefix (--PREFIX-label)
    #[arg(short, long, value_name = "PREFIX")]
    pub prefix: Option<String>,

    #[command(flatten)]
    pub viewport: ViewportArgs,

    /// Manual size for one step, by index or label (e.g. 2=0.9 or lg=1.3)
    #[arg(long = "override", value_name = "STEP=REM", value_parser = parse_override)]
    pub overrides: Vec<StepOverride>,
}

/// A manual size given on the command line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOverride {
    /// Step index
    pub index: usize,
    /// Size in rem
    pub value: f64,
}

/// Parses `INDEX=VALUE` or `LABEL=VALUE`.
pub fn parse_override(raw: &str) -> Result<StepOverride, String> {
    let (step, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected STEP=VALUE, got '{raw}'"))?;

    let step = step.trim();
    let index = match step.parse::<usize>() {
        Ok(index) => index,
        Err(_) => Step::by_label(step)
            .map(|s| s.index)
            .ok_or_else(|| format!("unknown step '{step}'"))?,
    };

    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid size '{}': {e}", value.trim()))?;

    Ok(StepOverride { index, value })
}

impl ScaleArgs {
    /// Applies the given flags on top of the configured defaults.
    #[must_use]
    pub fn resolve(&self, config: &Config) -> ScaleConfig {
        let defaults = config.scale_config();
        ScaleConfig {
            base_size: self.base_size.unwrap_or(defaults.base_size),
            num_steps: self.steps.unwrap_or(defaults.num_steps),
            mode: self.mode.unwrap_or(defaults.mode),
            curve: self.curve.unwrap_or(defaults.curve),
            intensity: self.intensity.unwrap_or(defaults.intensity),
            viewport: self.viewport.resolve(defaults.viewport),
            prefix: self.prefix.clone().unwrap_or(defaults.prefix),
        }
    }

    /// Generates the scale and applies every `--override`.
    pub fn build_state(&self, scale: &ScaleConfig) -> CliResult<ScaleState> {
        let mut state = ScaleState::from_config(scale)?;
        for step in &self.overrides {
            state = state.with_override(step.index, step.value)?;
        }
        Ok(state)
    }
}

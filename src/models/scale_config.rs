//! The full parameter set for one scale.

use serde::{Deserialize, Serialize};

use super::curve::{CurveType, Generation, ScaleMode};
use super::step::{clamp_step_count, labels_for};
use super::viewport::ViewportParams;
use crate::scale::{ScaleError, ScaleResult};

/// Default base size, in root units.
pub const DEFAULT_BASE_SIZE: f64 = 1.0;
/// Default number of steps (xs through 3xl).
pub const DEFAULT_NUM_STEPS: usize = 8;
/// Default curve intensity.
pub const DEFAULT_INTENSITY: f64 = 1.0;
/// Default custom-property prefix.
pub const DEFAULT_PREFIX: &str = "fs";

/// Every parameter the generator and clamp derivation recognize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleConfig {
    /// Size of the `base` step
    pub base_size: f64,
    /// Requested number of steps (clamped to 5..=14 when used)
    pub num_steps: usize,
    /// Curve or fixed table
    pub mode: ScaleMode,
    /// Curve shape (curve mode only)
    pub curve: CurveType,
    /// Curve intensity (curve mode only)
    pub intensity: f64,
    /// Viewport range for clamp output
    pub viewport: ViewportParams,
    /// Custom-property prefix (`--{prefix}-{label}`)
    pub prefix: String,
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            base_size: DEFAULT_BASE_SIZE,
            num_steps: DEFAULT_NUM_STEPS,
            mode: ScaleMode::default(),
            curve: CurveType::default(),
            intensity: DEFAULT_INTENSITY,
            viewport: ViewportParams::default(),
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

impl ScaleConfig {
    /// Number of steps actually generated.
    #[must_use]
    pub fn step_count(&self) -> usize {
        clamp_step_count(self.num_steps)
    }

    /// Labels of the generated steps.
    #[must_use]
    pub fn labels(&self) -> &'static [&'static str] {
        labels_for(self.num_steps)
    }

    /// Generation parameters for the current mode.
    #[must_use]
    pub fn generation(&self) -> Generation {
        match self.mode {
            ScaleMode::Curve => Generation::Curve {
                curve: self.curve,
                intensity: self.intensity,
            },
            ScaleMode::Proportional => Generation::Proportional,
        }
    }

    /// Checks numeric sanity of every parameter.
    ///
    /// The prefix is validated at output time since it never affects sizes.
    pub fn validate(&self) -> ScaleResult<()> {
        validate_base_size(self.base_size)?;
        if self.mode == ScaleMode::Curve {
            validate_intensity(self.intensity)?;
        }
        self.viewport.validate()
    }
}

/// Base size must be a positive finite number.
pub fn validate_base_size(base_size: f64) -> ScaleResult<()> {
    if !base_size.is_finite() || base_size <= 0.0 {
        return Err(ScaleError::invalid(
            "base_size",
            format!("must be a positive number, got {base_size}"),
        ));
    }
    Ok(())
}

/// Intensity must be a positive finite number.
pub fn validate_intensity(intensity: f64) -> ScaleResult<()> {
    if !intensity.is_finite() || intensity <= 0.0 {
        return Err(ScaleError::invalid(
            "intensity",
            format!("must be a positive number, got {intensity}"),
        ));
    }
    Ok(())
}

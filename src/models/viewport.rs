//! Viewport and root-unit parameters for clamp derivation.

use serde::{Deserialize, Serialize};

use crate::scale::{ScaleError, ScaleResult};

/// Default narrowest viewport, in pixels.
pub const DEFAULT_MIN_VIEWPORT: f64 = 320.0;
/// Default widest viewport, in pixels.
pub const DEFAULT_MAX_VIEWPORT: f64 = 1440.0;
/// Default root font size, in pixels per rem.
pub const DEFAULT_DIVISOR: f64 = 16.0;
/// Default extra growth allowed at the widest viewport (0.2 = 20%).
pub const DEFAULT_GROWTH: f64 = 0.2;

/// Viewport range over which sizes interpolate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportParams {
    /// Viewport width (px) at which the minimum size applies
    pub min_viewport: f64,
    /// Viewport width (px) at which the maximum size applies
    pub max_viewport: f64,
    /// Pixels per root unit
    pub divisor: f64,
    /// Fractional growth applied to the maximum anchor
    pub growth: f64,
}

impl Default for ViewportParams {
    fn default() -> Self {
        Self {
            min_viewport: DEFAULT_MIN_VIEWPORT,
            max_viewport: DEFAULT_MAX_VIEWPORT,
            divisor: DEFAULT_DIVISOR,
            growth: DEFAULT_GROWTH,
        }
    }
}

impl ViewportParams {
    /// Rejects parameters that would make the interpolation slope undefined.
    pub fn validate(&self) -> ScaleResult<()> {
        let fields = [
            ("min_viewport", self.min_viewport),
            ("max_viewport", self.max_viewport),
            ("divisor", self.divisor),
            ("growth", self.growth),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ScaleError::DegenerateViewport(format!(
                "{name} must be a finite number"
            )));
        }
        if self.divisor <= 0.0 {
            return Err(ScaleError::DegenerateViewport(format!(
                "divisor must be positive, got {}",
                self.divisor
            )));
        }
        if self.min_viewport <= 0.0 {
            return Err(ScaleError::DegenerateViewport(format!(
                "min_viewport must be positive, got {}",
                self.min_viewport
            )));
        }
        if self.min_viewport >= self.max_viewport {
            return Err(ScaleError::DegenerateViewport(format!(
                "min_viewport ({}) must be smaller than max_viewport ({})",
                self.min_viewport, self.max_viewport
            )));
        }
        if self.growth < 0.0 {
            return Err(ScaleError::DegenerateViewport(format!(
                "growth must not be negative, got {}",
                self.growth
            )));
        }
        Ok(())
    }

    /// Narrowest viewport in root units.
    #[must_use]
    pub fn min_root_units(&self) -> f64 {
        self.min_viewport / self.divisor
    }

    /// Widest viewport in root units.
    #[must_use]
    pub fn max_root_units(&self) -> f64 {
        self.max_viewport / self.divisor
    }

    /// Multiplier applied to the maximum anchor (1.2 for the default 20%).
    #[must_use]
    pub fn growth_factor(&self) -> f64 {
        1.0 + self.growth
    }
}

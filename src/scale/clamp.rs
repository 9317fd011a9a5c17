//! Responsive `clamp()` derivation.
//!
//! A size becomes a linear function of viewport width that equals the
//! minimum anchor at the narrowest viewport and the grown maximum anchor at
//! the widest one:
//!
//! ```text
//! clamp(MINrem, calc(SLOPEvw + INTERCEPTrem), MAXrem)
//! ```

use serde::Serialize;
use std::fmt;
use tracing::trace;

use crate::models::viewport::ViewportParams;

use super::{ScaleError, ScaleResult};

/// A derived clamp expression, kept numeric until rendered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClampExpression {
    /// Lower bound in root units
    pub min: f64,
    /// Viewport-proportional slope, in vw
    pub slope_vw: f64,
    /// Constant term in root units
    pub intercept: f64,
    /// Upper bound in root units
    pub max: f64,
}

impl ClampExpression {
    /// Evaluates the expression at a viewport width in pixels, in root units.
    #[must_use]
    pub fn resolve_at(&self, viewport_px: f64, divisor: f64) -> f64 {
        let preferred = self.slope_vw * viewport_px / 100.0 / divisor + self.intercept;
        preferred.clamp(self.min, self.max)
    }
}

impl fmt::Display for ClampExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "clamp({}rem, calc({}vw + {}rem), {}rem)",
            fixed3(self.min),
            fixed3(self.slope_vw),
            fixed3(self.intercept),
            fixed3(self.max)
        )
    }
}

/// Formats to three decimals, folding negative zero into `0.000`.
fn fixed3(value: f64) -> String {
    let formatted = format!("{value:.3}");
    if formatted == "-0.000" {
        "0.000".to_string()
    } else {
        formatted
    }
}

/// Derives a clamp expression between two anchors.
///
/// The growth allowance applies to `max_value` only, so
/// `derive_clamp(v, v, ..)` grows from `v` to `v * (1 + growth)`.
/// A grown maximum below the minimum is rejected, since the browser would
/// pin the result at the minimum.
pub fn derive_clamp(
    min_value: f64,
    max_value: f64,
    viewport: &ViewportParams,
) -> ScaleResult<ClampExpression> {
    validate_size("min_value", min_value)?;
    validate_size("max_value", max_value)?;
    viewport.validate()?;

    let min_root = viewport.min_root_units();
    let max_root = viewport.max_root_units();

    let effective_min = min_value;
    let effective_max = max_value * viewport.growth_factor();
    if effective_max < effective_min {
        return Err(ScaleError::invalid(
            "max_value",
            format!(
                "grown maximum {effective_max} is below the minimum {effective_min}"
            ),
        ));
    }

    let slope = (effective_max - effective_min) / (max_root - min_root);
    let intercept = effective_min - slope * min_root;

    let expression = ClampExpression {
        min: finite("min", effective_min)?,
        slope_vw: finite("slope", slope * 100.0)?,
        intercept: finite("intercept", intercept)?,
        max: finite("max", effective_max)?,
    };
    trace!(min_value, max_value, %expression, "derived clamp");
    Ok(expression)
}

/// Derives the clamp expression for a single scale step.
pub fn clamp_for_size(value: f64, viewport: &ViewportParams) -> ScaleResult<ClampExpression> {
    derive_clamp(value, value, viewport)
}

fn validate_size(name: &'static str, value: f64) -> ScaleResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ScaleError::invalid(
            name,
            format!("must be a non-negative number, got {value}"),
        ));
    }
    Ok(())
}

fn finite(what: &'static str, value: f64) -> ScaleResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ScaleError::NonFiniteResult(what))
    }
}

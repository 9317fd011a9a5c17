//! Growth curves and generation modes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::scale::ScaleError;

/// Shape of the growth curve applied on each side of the pivot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CurveType {
    /// Equal spacing between steps
    #[default]
    Linear,
    /// Spacing shaped by `fraction^intensity`
    Exponential,
    /// Spacing that front-loads growth near the pivot
    Logarithmic,
}

impl CurveType {
    /// All curve types, in cycling order.
    pub const ALL: [Self; 3] = [Self::Linear, Self::Exponential, Self::Logarithmic];

    /// Weight in `[0, 1]` for a step `distance` positions away from the pivot
    /// in a zone of `zone_len` steps. The farthest step always weighs 1.0.
    #[must_use]
    pub fn weight(self, distance: usize, zone_len: usize, intensity: f64) -> f64 {
        let fraction = distance as f64 / zone_len as f64;
        match self {
            Self::Linear => fraction,
            Self::Exponential => fraction.powf(intensity),
            Self::Logarithmic => ((distance + 1) as f64).ln() / ((zone_len + 1) as f64).ln(),
        }
    }

    /// Lowercase identifier used in config files and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Exponential => "exponential",
            Self::Logarithmic => "logarithmic",
        }
    }

    /// The curve after this one, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Linear => Self::Exponential,
            Self::Exponential => Self::Logarithmic,
            Self::Logarithmic => Self::Linear,
        }
    }
}

impl fmt::Display for CurveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CurveType {
    type Err = ScaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "linear" => Ok(Self::Linear),
            "exponential" | "exp" => Ok(Self::Exponential),
            "logarithmic" | "log" => Ok(Self::Logarithmic),
            other => Err(ScaleError::invalid(
                "curve",
                format!("'{other}' is not one of linear, exponential, logarithmic"),
            )),
        }
    }
}

/// How sizes are derived from the base size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScaleMode {
    /// Parametric curve around the pivot
    #[default]
    Curve,
    /// Fixed multiplier table
    Proportional,
}

impl ScaleMode {
    /// Lowercase identifier used in config files and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Curve => "curve",
            Self::Proportional => "proportional",
        }
    }

    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Curve => Self::Proportional,
            Self::Proportional => Self::Curve,
        }
    }
}

impl fmt::Display for ScaleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScaleMode {
    type Err = ScaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "curve" => Ok(Self::Curve),
            "proportional" | "fixed" | "table" => Ok(Self::Proportional),
            other => Err(ScaleError::invalid(
                "mode",
                format!("'{other}' is not one of curve, proportional"),
            )),
        }
    }
}

/// Fully resolved generation parameters.
///
/// Curve parameters only exist in curve mode, so the proportional table can
/// never be affected by them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum Generation {
    /// Parametric curve around the pivot
    Curve {
        /// Curve shape
        curve: CurveType,
        /// Exponent for the exponential curve (ignored by the others)
        intensity: f64,
    },
    /// Fixed multiplier table
    Proportional,
}

impl Generation {
    /// The mode this generation belongs to.
    #[must_use]
    pub const fn mode(&self) -> ScaleMode {
        match self {
            Self::Curve { .. } => ScaleMode::Curve,
            Self::Proportional => ScaleMode::Proportional,
        }
    }
}

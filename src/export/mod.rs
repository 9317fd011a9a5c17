//! Output assembly for generated scales.
//!
//! Pairs every step with its clamp expression and renders the result in one
//! of several text formats. Declarations always follow label order, never
//! the order overrides were recorded in.

pub mod css;
pub mod json;

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::models::viewport::ViewportParams;
use crate::scale::{clamp_for_size, ClampExpression, ScaleError, ScaleResult, ScaleState};

pub use css::{render_declarations, render_root_block, validate_prefix};
pub use json::render_json;

/// One step of the listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaleDeclaration {
    /// Step label (e.g. "lg")
    pub label: &'static str,
    /// Effective size in root units
    pub size: f64,
    /// Whether the size was set manually
    pub overridden: bool,
    /// Derived responsive expression
    pub clamp: ClampExpression,
}

impl ScaleDeclaration {
    /// Custom property name for this step.
    #[must_use]
    pub fn property(&self, prefix: &str) -> String {
        format!("--{}-{}", prefix, self.label)
    }
}

/// Derives a declaration for every step of `state`, in label order.
pub fn build_declarations(
    state: &ScaleState,
    viewport: &ViewportParams,
) -> ScaleResult<Vec<ScaleDeclaration>> {
    state
        .steps()
        .enumerate()
        .map(|(index, (label, size))| {
            Ok(ScaleDeclaration {
                label,
                size,
                overridden: state.is_overridden(index),
                clamp: clamp_for_size(size, viewport)?,
            })
        })
        .collect()
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// `:root { ... }` block
    #[default]
    Css,
    /// Bare declaration lines
    Declarations,
    /// JSON design tokens
    Json,
}

impl ExportFormat {
    /// File extension used for exported files.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Css | Self::Declarations => "css",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Css => "css",
            Self::Declarations => "declarations",
            Self::Json => "json",
        })
    }
}

impl FromStr for ExportFormat {
    type Err = ScaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "css" => Ok(Self::Css),
            "declarations" | "vars" => Ok(Self::Declarations),
            "json" => Ok(Self::Json),
            other => Err(ScaleError::invalid(
                "format",
                format!("'{other}' is not one of css, declarations, json"),
            )),
        }
    }
}

/// Renders a full listing for `state` in the requested format.
pub fn render_scale(
    state: &ScaleState,
    viewport: &ViewportParams,
    prefix: &str,
    format: ExportFormat,
) -> ScaleResult<String> {
    validate_prefix(prefix)?;
    let declarations = build_declarations(state, viewport)?;
    match format {
        ExportFormat::Css => Ok(render_root_block(prefix, &declarations)),
        ExportFormat::Declarations => Ok(render_declarations(prefix, &declarations)),
        ExportFormat::Json => render_json(prefix, &declarations, state.step_size(), viewport),
    }
}

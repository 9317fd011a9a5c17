//! JSON design-token rendering.

use serde::Serialize;

use super::ScaleDeclaration;
use crate::models::viewport::ViewportParams;
use crate::scale::{ScaleError, ScaleResult};

/// JSON document describing a rendered scale.
#[derive(Debug, Serialize)]
pub struct ScaleDocument<'a> {
    /// Custom-property prefix
    pub prefix: &'a str,
    /// Viewport range the expressions interpolate over
    pub viewport: &'a ViewportParams,
    /// Average spacing (curve mode only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_size: Option<f64>,
    /// Steps in label order
    pub steps: Vec<TokenEntry<'a>>,
}

/// One step in the JSON document.
#[derive(Debug, Serialize)]
pub struct TokenEntry<'a> {
    /// Step label
    pub label: &'a str,
    /// Custom property name
    pub property: String,
    /// Effective size in root units
    pub size: f64,
    /// Whether the size was set manually
    pub overridden: bool,
    /// Rendered clamp expression
    pub clamp: String,
}

/// Renders the scale as pretty-printed JSON.
pub fn render_json(
    prefix: &str,
    declarations: &[ScaleDeclaration],
    step_size: Option<f64>,
    viewport: &ViewportParams,
) -> ScaleResult<String> {
    let document = ScaleDocument {
        prefix,
        viewport,
        step_size,
        steps: declarations
            .iter()
            .map(|d| TokenEntry {
                label: d.label,
                property: d.property(prefix),
                size: d.size,
                overridden: d.overridden,
                clamp: d.clamp.to_string(),
            })
            .collect(),
    };

    serde_json::to_string_pretty(&document)
        .map_err(|e| ScaleError::invalid("json", format!("failed to serialize scale: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::build_declarations;
    use crate::models::scale_config::ScaleConfig;
    use crate::scale::ScaleState;

    #[test]
    fn test_json_document_shape() {
        let config = ScaleConfig::default();
        let state = ScaleState::from_config(&config)
            .unwrap()
            .with_override(0, 0.5)
            .unwrap();
        let declarations = build_declarations(&state, &config.viewport).unwrap();
        let json = render_json("fs", &declarations, state.step_size(), &config.viewport).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["prefix"], "fs");
        assert_eq!(value["steps"].as_array().unwrap().len(), 8);
        assert_eq!(value["steps"][0]["property"], "--fs-xs");
        assert_eq!(value["steps"][0]["overridden"], true);
        assert_eq!(value["steps"][3]["size"], 1.0);
        assert!(value["steps"][3]["clamp"]
            .as_str()
            .unwrap()
            .starts_with("clamp(1.000rem, calc("));
        assert!(value["steps"][3].get("value").is_none());
        assert!(value["step_size"].is_number());
        assert_eq!(value["viewport"]["divisor"], 16.0);
    }

    #[test]
    fn test_step_size_omitted_when_absent() {
        let config = ScaleConfig::default();
        let state = ScaleState::from_config(&config).unwrap();
        let declarations = build_declarations(&state, &config.viewport).unwrap();
        let json = render_json("fs", &declarations, None, &config.viewport).unwrap();
        assert!(!json.contains("step_size"));
    }
}

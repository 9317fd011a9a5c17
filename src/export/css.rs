//! CSS custom-property rendering.

use regex::Regex;

use super::ScaleDeclaration;
use crate::scale::{ScaleError, ScaleResult};

/// Checks that `prefix` can be embedded in a custom property name.
pub fn validate_prefix(prefix: &str) -> ScaleResult<()> {
    let prefix_regex = Regex::new(r"^[A-Za-z_][A-Za-z0-9_-]*$")
        .map_err(|e| ScaleError::invalid("prefix", e.to_string()))?;
    if !prefix_regex.is_match(prefix) {
        return Err(ScaleError::invalid(
            "prefix",
            format!("'{prefix}' must start with a letter or underscore and contain only letters, digits, '-' or '_'"),
        ));
    }
    Ok(())
}

/// One `--prefix-label: clamp(...);` line per step, newline separated.
#[must_use]
pub fn render_declarations(prefix: &str, declarations: &[ScaleDeclaration]) -> String {
    declarations
        .iter()
        .map(|d| format!("{}: {};", d.property(prefix), d.clamp))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Declarations wrapped in a tab-indented `:root` block.
#[must_use]
pub fn render_root_block(prefix: &str, declarations: &[ScaleDeclaration]) -> String {
    let mut out = String::from(":root {");
    for line in render_declarations(prefix, declarations).lines() {
        out.push_str("\n\t");
        out.push_str(line);
    }
    out.push_str("\n}\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::build_declarations;
    use crate::models::curve::CurveType;
    use crate::models::scale_config::ScaleConfig;
    use crate::scale::ScaleState;

    fn sixteen_linear() -> ScaleConfig {
        ScaleConfig {
            base_size: 16.0,
            num_steps: 8,
            curve: CurveType::Linear,
            intensity: 1.0,
            prefix: "fs".into(),
            ..ScaleConfig::default()
        }
    }

    #[test]
    fn test_prefix_validation() {
        assert!(validate_prefix("fs").is_ok());
        assert!(validate_prefix("font-size_2").is_ok());
        assert!(validate_prefix("_x").is_ok());
        assert!(validate_prefix("").is_err());
        assert!(validate_prefix("2fs").is_err());
        assert!(validate_prefix("fs;color:red").is_err());
        assert!(validate_prefix("f s").is_err());
    }

    #[test]
    fn test_root_block() {
        let config = sixteen_linear();
        let state = ScaleState::from_config(&config).unwrap();
        let declarations = build_declarations(&state, &config.viewport).unwrap();
        let css = render_root_block("fs", &declarations);

        let lines: Vec<_> = css.lines().collect();
        assert_eq!(lines.first(), Some(&":root {"));
        assert_eq!(lines.last(), Some(&"}"));
        assert_eq!(lines.len(), 10);
        assert!(lines[1].starts_with("\t--fs-xs: clamp("));
        assert!(lines[8].starts_with("\t--fs-3xl: clamp("));
        assert!(css.contains("\t--fs-base: clamp(16.000rem, calc("));
        assert!(css.contains("rem), 19.200rem);"));
    }

    #[test]
    fn test_bare_declarations() {
        let config = sixteen_linear();
        let state = ScaleState::from_config(&config).unwrap();
        let declarations = build_declarations(&state, &config.viewport).unwrap();
        let text = render_declarations("type", &declarations);
        assert_eq!(text.lines().count(), 8);
        assert!(text.lines().all(|l| l.starts_with("--type-") && l.ends_with(");")));
        assert!(!text.contains("NaN"));
        assert!(!text.contains("inf"));
    }
}

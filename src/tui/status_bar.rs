//! Status bar widget for parameters, messages and hints

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::AppState;
use crate::models::ScaleMode;

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the parameter summary and the latest message
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;

        let message_line = if let Some(error) = &state.error_message {
            Line::from(vec![
                Span::styled("ERROR: ", Style::default().fg(theme.error)),
                Span::styled(error.as_str(), Style::default().fg(theme.text)),
            ])
        } else if !state.status_message.is_empty() {
            Line::from(Span::styled(
                state.status_message.as_str(),
                Style::default().fg(theme.success),
            ))
        } else {
            Line::from(Span::styled(
                "←/→ select  ↑/↓ adjust  x clear  +/- steps  c curve  m mode  y copy  ? help  q quit",
                Style::default().fg(theme.text_muted),
            ))
        };

        let lines = vec![
            Line::from(Span::styled(
                Self::summary(state),
                Style::default().fg(theme.text),
            )),
            message_line,
        ];

        let widget = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(theme.primary)),
        );
        f.render_widget(widget, area);
    }

    /// One-line description of the current parameters.
    pub fn summary(state: &AppState) -> String {
        let config = &state.scale_config;
        let mut parts = vec![
            format!("base {:.4}rem", config.base_size),
            format!("{} steps", state.scale.len()),
        ];

        match config.mode {
            ScaleMode::Curve => {
                parts.push(format!("{} x{:.1}", config.curve, config.intensity));
                if let Some(step) = state.scale.step_size() {
                    parts.push(format!("step {step:.3}"));
                }
            }
            ScaleMode::Proportional => parts.push("proportional".to_string()),
        }

        parts.push(format!(
            "{}-{}px",
            config.viewport.min_viewport, config.viewport.max_viewport
        ));

        let overrides = state.scale.overrides().len();
        if overrides > 0 {
            parts.push(format!("{overrides} override(s)"));
        }

        parts.join(" | ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, ThemeMode};

    #[test]
    fn test_summary() {
        let mut config = Config::new();
        config.ui.theme_mode = ThemeMode::Dark;
        let state = AppState::new(config).unwrap();

        let summary = StatusBar::summary(&state);
        assert!(summary.starts_with("base 1.0000rem | 8 steps | linear x1.0 | step "));
        assert!(summary.ends_with("320-1440px"));
    }
}

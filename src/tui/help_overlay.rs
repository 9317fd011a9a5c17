//! Help overlay listing every shortcut.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::{centered_rect, Theme};
use crate::shortcuts::ShortcutRegistry;

/// Help overlay widget
pub struct HelpOverlay;

impl HelpOverlay {
    /// Render the overlay centered on screen.
    pub fn render(f: &mut Frame, shortcuts: &ShortcutRegistry, theme: &Theme) {
        let area: Rect = centered_rect(60, 80, f.area());
        f.render_widget(Clear, area);

        let lines: Vec<Line> = shortcuts
            .help_entries()
            .into_iter()
            .map(|(keys, action)| {
                Line::from(vec![
                    Span::styled(
                        format!("{keys:<22}"),
                        Style::default()
                            .fg(theme.accent)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(action.description(), Style::default().fg(theme.text)),
                ])
            })
            .collect();

        let widget = Paragraph::new(lines)
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Shortcuts (? or Esc to close) ")
                    .border_style(Style::default().fg(theme.primary)),
            );
        f.render_widget(widget, area);
    }
}

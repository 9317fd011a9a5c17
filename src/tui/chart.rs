//! Line chart of step sizes.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    symbols::Marker,
    text::Line,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

use super::AppState;

/// Headroom above the largest size so the top point is not drawn on the border.
const Y_HEADROOM: f64 = 1.1;

/// Scale chart widget
pub struct ScaleChart;

impl ScaleChart {
    /// Render the scale as a line through every step, marking overrides and
    /// the selection.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let sizes = state.scale.sizes();
        let line = points(&sizes);

        let overridden: Vec<(f64, f64)> = line
            .iter()
            .enumerate()
            .filter(|(index, _)| state.scale.is_overridden(*index))
            .map(|(_, point)| *point)
            .collect();
        let selected: Vec<(f64, f64)> = line.get(state.selected).copied().into_iter().collect();

        let datasets = vec![
            Dataset::default()
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(theme.series))
                .data(&line),
            Dataset::default()
                .marker(Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(theme.series_override))
                .data(&overridden),
            Dataset::default()
                .marker(Marker::Block)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(theme.accent))
                .data(&selected),
        ];

        let x_labels: Vec<Line> = state
            .scale
            .labels()
            .iter()
            .enumerate()
            .map(|(index, label)| {
                let style = if index == state.selected {
                    Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.text_muted)
                };
                Line::styled(*label, style)
            })
            .collect();

        let y_bounds = y_bounds(&sizes);
        let y_labels: Vec<Line> = y_bounds_labels(y_bounds)
            .into_iter()
            .map(|label| Line::styled(label, Style::default().fg(theme.text_muted)))
            .collect();

        let chart = Chart::new(datasets)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ", state.scale_config.mode))
                    .border_style(Style::default().fg(theme.primary)),
            )
            .x_axis(
                Axis::default()
                    .style(Style::default().fg(theme.text_muted))
                    .bounds(x_bounds(sizes.len()))
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .title("rem")
                    .style(Style::default().fg(theme.text_muted))
                    .bounds(y_bounds)
                    .labels(y_labels),
            );

        f.render_widget(chart, area);
    }
}

/// One point per step: step index on x, size on y.
#[allow(clippy::cast_precision_loss)]
fn points(sizes: &[f64]) -> Vec<(f64, f64)> {
    sizes
        .iter()
        .enumerate()
        .map(|(index, size)| (index as f64, *size))
        .collect()
}

/// Axis labels are spread evenly, so x runs from the first to the last index
/// and each label sits on its step.
#[allow(clippy::cast_precision_loss)]
fn x_bounds(count: usize) -> [f64; 2] {
    [0.0, count.saturating_sub(1).max(1) as f64]
}

fn y_bounds(sizes: &[f64]) -> [f64; 2] {
    let top = sizes.iter().copied().fold(0.0_f64, f64::max);
    if top > 0.0 {
        [0.0, top * Y_HEADROOM]
    } else {
        [0.0, 1.0]
    }
}

fn y_bounds_labels([low, high]: [f64; 2]) -> Vec<String> {
    [low, (low + high) / 2.0, high]
        .iter()
        .map(|value| format!("{value:.2}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_follow_step_order() {
        let points = points(&[0.75, 1.0, 1.5]);
        assert_eq!(points, vec![(0.0, 0.75), (1.0, 1.0), (2.0, 1.5)]);
    }

    #[test]
    fn test_x_bounds_span_every_step() {
        assert_eq!(x_bounds(8), [0.0, 7.0]);
        assert_eq!(x_bounds(0), [0.0, 1.0]);
    }

    #[test]
    fn test_y_bounds_leave_headroom() {
        let [low, high] = y_bounds(&[1.0, 2.0, 4.0]);
        assert_eq!(low, 0.0);
        assert!(high > 4.0);
        assert_eq!(y_bounds(&[]), [0.0, 1.0]);
        assert_eq!(y_bounds(&[0.0, 0.0]), [0.0, 1.0]);
    }

    #[test]
    fn test_y_labels() {
        assert_eq!(y_bounds_labels([0.0, 4.0]), vec!["0.00", "2.00", "4.00"]);
    }
}

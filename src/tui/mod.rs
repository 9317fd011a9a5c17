//! Interactive scale editor.
//!
//! The editor owns a single [`ScaleState`]. Every key press builds a new
//! configuration or override and swaps the state in only when the engine
//! accepts it, so a rejected edit leaves the scale on screen untouched.

mod chart;
mod help_overlay;
mod status_bar;
pub mod theme;

use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::constants::APP_NAME;
use crate::export::{build_declarations, render_root_block, ScaleDeclaration};
use crate::models::step::{MAX_STEPS, MIN_STEPS};
use crate::models::ScaleConfig;
use crate::scale::{ScaleResult, ScaleState};
use crate::shortcuts::{Action, ShortcutRegistry};

use chart::ScaleChart;
use help_overlay::HelpOverlay;
use status_bar::StatusBar;
pub use theme::Theme;

/// Base size change per `b` / `B` press (1px at 16px per rem).
pub const BASE_SIZE_STEP: f64 = 0.0625;
/// Intensity change per `[` / `]` press.
pub const INTENSITY_STEP: f64 = 0.1;
/// Multiplier applied to the nudge when Shift is held.
pub const LARGE_NUDGE_FACTOR: f64 = 10.0;

/// Editor state.
pub struct AppState {
    /// Loaded configuration (defaults and UI preferences)
    pub config: Config,
    /// Parameters of the scale being edited
    pub scale_config: ScaleConfig,
    /// Computed sizes and overrides
    pub scale: ScaleState,
    /// Selected step index
    pub selected: usize,
    /// Whether the help overlay is open
    pub show_help: bool,
    /// Last informational message
    pub status_message: String,
    /// Last rejected edit
    pub error_message: Option<String>,
    /// Set when the user quits
    pub should_quit: bool,
    /// Active colors
    pub theme: Theme,
    shortcuts: ShortcutRegistry,
}

impl AppState {
    /// Creates the editor state from the configured defaults.
    pub fn new(config: Config) -> Result<Self> {
        let scale_config = config.scale_config();
        let scale =
            ScaleState::from_config(&scale_config).context("Configured defaults are invalid")?;
        let theme = Theme::from_mode(config.ui.theme_mode);

        Ok(Self {
            config,
            scale_config,
            selected: crate::models::PIVOT_INDEX,
            scale,
            show_help: false,
            status_message: String::new(),
            error_message: None,
            should_quit: false,
            theme,
            shortcuts: ShortcutRegistry::new(),
        })
    }

    /// Declarations for the current scale.
    pub fn declarations(&self) -> ScaleResult<Vec<ScaleDeclaration>> {
        build_declarations(&self.scale, &self.scale_config.viewport)
    }

    /// Complete `:root` block for the current scale.
    pub fn css(&self) -> ScaleResult<String> {
        Ok(render_root_block(
            &self.scale_config.prefix,
            &self.declarations()?,
        ))
    }

    /// Swaps in `next` if the engine accepts it.
    fn update_config(&mut self, next: ScaleConfig) -> bool {
        match self.scale.apply(&next) {
            Ok(scale) => {
                self.scale = scale;
                self.scale_config = next;
                self.selected = self.selected.min(self.scale.len().saturating_sub(1));
                true
            }
            Err(e) => {
                warn!(error = %e, "rejected parameter change");
                self.error_message = Some(e.to_string());
                false
            }
        }
    }

    /// Moves the selected step's size by `delta`, recording an override.
    pub fn nudge(&mut self, delta: f64) {
        let Some(current) = self.scale.size(self.selected) else {
            return;
        };
        let value = ((current + delta) * 1000.0).round() / 1000.0;

        match self.scale.with_override(self.selected, value) {
            Ok(scale) => {
                self.scale = scale;
                let label = self.scale.labels()[self.selected];
                self.status_message = format!("{label} set to {:.3}", value.max(0.0));
            }
            Err(e) => self.error_message = Some(e.to_string()),
        }
    }

    /// Performs a single editor action.
    pub fn dispatch(&mut self, action: Action) {
        self.error_message = None;
        debug!(action = action.id(), "dispatch");

        let last = self.scale.len().saturating_sub(1);
        let nudge = self.config.ui.nudge;

        match action {
            Action::SelectPrevious => self.selected = self.selected.saturating_sub(1),
            Action::SelectNext => self.selected = (self.selected + 1).min(last),
            Action::SelectFirst => self.selected = 0,
            Action::SelectLast => self.selected = last,

            Action::NudgeUp => self.nudge(nudge),
            Action::NudgeDown => self.nudge(-nudge),
            Action::NudgeUpLarge => self.nudge(nudge * LARGE_NUDGE_FACTOR),
            Action::NudgeDownLarge => self.nudge(-nudge * LARGE_NUDGE_FACTOR),
            Action::ClearOverride => {
                if let Ok(scale) = self.scale.without_override(self.selected) {
                    self.scale = scale;
                    self.status_message = "Override cleared".to_string();
                }
            }
            Action::ClearAllOverrides => {
                self.scale = self.scale.without_overrides();
                self.status_message = "All overrides cleared".to_string();
            }

            Action::AddStep | Action::RemoveStep => {
                let len = self.scale.len();
                let target = if action == Action::AddStep {
                    len + 1
                } else {
                    len.saturating_sub(1)
                };
                if !(MIN_STEPS..=MAX_STEPS).contains(&target) {
                    self.status_message = format!("Scale has {MIN_STEPS} to {MAX_STEPS} steps");
                    return;
                }
                let next = ScaleConfig {
                    num_steps: target,
                    ..self.scale_config.clone()
                };
                if self.update_config(next) {
                    self.status_message = format!("{target} steps");
                }
            }
            Action::IncreaseBase | Action::DecreaseBase => {
                let delta = if action == Action::IncreaseBase {
                    BASE_SIZE_STEP
                } else {
                    -BASE_SIZE_STEP
                };
                let base_size = (self.scale_config.base_size + delta).max(BASE_SIZE_STEP);
                let next = ScaleConfig {
                    base_size,
                    ..self.scale_config.clone()
                };
                if self.update_config(next) {
                    self.status_message = format!("Base size {base_size:.4}");
                }
            }
            Action::CycleCurve => {
                let next = ScaleConfig {
                    curve: self.scale_config.curve.next(),
                    ..self.scale_config.clone()
                };
                if self.update_config(next) {
                    self.status_message = format!("Curve: {}", self.scale_config.curve);
                }
            }
            Action::IncreaseIntensity | Action::DecreaseIntensity => {
                let delta = if action == Action::IncreaseIntensity {
                    INTENSITY_STEP
                } else {
                    -INTENSITY_STEP
                };
                let intensity = ((self.scale_config.intensity + delta) * 10.0).round() / 10.0;
                let next = ScaleConfig {
                    intensity: intensity.max(INTENSITY_STEP),
                    ..self.scale_config.clone()
                };
                if self.update_config(next) {
                    self.status_message = format!("Intensity {:.1}", self.scale_config.intensity);
                }
            }
            Action::ToggleMode => {
                let next = ScaleConfig {
                    mode: self.scale_config.mode.toggled(),
                    ..self.scale_config.clone()
                };
                if self.update_config(next) {
                    self.status_message = format!("Mode: {}", self.scale_config.mode);
                }
            }

            Action::CopyCss => self.copy_css(),
            Action::ToggleHelp => self.show_help = !self.show_help,
            Action::Quit => self.should_quit = true,
        }
    }

    fn copy_css(&mut self) {
        let css = match self.css() {
            Ok(css) => css,
            Err(e) => {
                self.error_message = Some(e.to_string());
                return;
            }
        };
        match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(css)) {
            Ok(()) => {
                info!("copied scale to clipboard");
                self.status_message = "CSS copied to clipboard".to_string();
            }
            Err(e) => self.error_message = Some(format!("Clipboard unavailable: {e}")),
        }
    }
}

/// Setup terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Runs the editor until the user quits.
pub fn run_tui(config: Config) -> Result<()> {
    let mut state = AppState::new(config)?;
    let mut terminal = setup_terminal()?;

    let result = run_app(&mut state, &mut terminal);

    // Restore even if the loop failed
    restore_terminal(terminal)?;
    result
}

fn run_app(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    info!("editor started");
    while !state.should_quit {
        terminal.draw(|f| render(f, state))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                handle_key_event(state, key);
            }
        }
    }
    info!("editor closed");
    Ok(())
}

/// Handle keyboard input events
pub fn handle_key_event(state: &mut AppState, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    let action = state.shortcuts.lookup(key);

    // Help overlay swallows everything except closing it
    if state.show_help {
        if matches!(action, Some(Action::ToggleHelp | Action::Quit)) {
            state.show_help = false;
        }
        return;
    }

    if let Some(action) = action {
        state.dispatch(action);
    }
}

fn render(f: &mut Frame, state: &AppState) {
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(10),   // Chart and declarations
            Constraint::Length(4), // Status bar
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], state);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    ScaleChart::render(f, main[0], state);
    render_declarations(f, main[1], state);

    StatusBar::render(f, chunks[2], state);

    if state.show_help {
        HelpOverlay::render(f, &state.shortcuts, &state.theme);
    }
}

fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let overrides = state.scale.overrides().len();
    let title = if overrides > 0 {
        format!(" {APP_NAME} - {overrides} override(s)")
    } else {
        format!(" {APP_NAME}")
    };

    let title_widget = Paragraph::new(title)
        .style(
            Style::default()
                .fg(state.theme.primary)
                .bg(state.theme.background),
        )
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(title_widget, area);
}

fn render_declarations(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let prefix = &state.scale_config.prefix;

    let lines: Vec<Line> = match state.declarations() {
        Ok(declarations) => declarations
            .iter()
            .enumerate()
            .map(|(index, d)| {
                let mut style = Style::default().fg(theme.text);
                if d.overridden {
                    style = style.fg(theme.series_override);
                }
                if index == state.selected {
                    style = style.bg(theme.highlight_bg).add_modifier(Modifier::BOLD);
                }
                Line::from(vec![
                    Span::styled(format!("{}: ", d.property(prefix)), style.fg(theme.primary)),
                    Span::styled(format!("{};", d.clamp), style),
                ])
            })
            .collect(),
        Err(e) => vec![Line::from(Span::styled(
            e.to_string(),
            Style::default().fg(theme.error),
        ))],
    };

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" CSS ")
            .border_style(Style::default().fg(theme.primary)),
    );
    f.render_widget(widget, area);
}

/// Helper to create a centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

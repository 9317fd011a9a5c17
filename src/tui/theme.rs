//! Colors for dark and light terminals.

use ratatui::style::Color;

use crate::config::ThemeMode;

/// Semantic color theme for the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Borders, titles and emphasis
    pub primary: Color,
    /// Selection and focus
    pub accent: Color,
    /// Confirmation messages
    pub success: Color,
    /// Errors
    pub error: Color,

    /// Primary text
    pub text: Color,
    /// Hints and secondary labels
    pub text_muted: Color,

    /// Main background
    pub background: Color,
    /// Selected row background
    pub highlight_bg: Color,

    /// Generated scale line
    pub series: Color,
    /// Manually overridden step marker
    pub series_override: Color,
}

impl Theme {
    /// Detects the OS theme and returns the matching Theme.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::light(),
            // Dark, unspecified, or detection failure
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::dark(),
        }
    }

    /// Resolves the configured preference, detecting the OS theme for `Auto`.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::detect(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Theme for dark terminal backgrounds.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            success: Color::Green,
            error: Color::Red,

            text: Color::White,
            text_muted: Color::DarkGray,

            background: Color::Black,
            highlight_bg: Color::DarkGray,

            series: Color::Cyan,
            series_override: Color::Magenta,
        }
    }

    /// Theme for light terminal backgrounds.
    ///
    /// Accent colors are darkened to stay readable on white.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            accent: Color::Rgb(180, 100, 0),
            success: Color::Rgb(0, 128, 0),
            error: Color::Red,

            text: Color::Black,
            text_muted: Color::Gray,

            background: Color::White,
            highlight_bg: Color::Rgb(230, 230, 230),

            series: Color::Blue,
            series_override: Color::Rgb(150, 0, 150),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}

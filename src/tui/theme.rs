//! Theme system for consistent UI colors across dark and light modes.
//!
//! Automatically detects the OS theme (dark/light mode) and applies
//! appropriate colors, including one distinct color per seat group.

use ratatui::style::Color;

use crate::config::ThemeMode;
use crate::models::Group;

/// Semantic color theme for the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Primary color for borders, titles, and emphasis
    pub primary: Color,
    /// Accent color for highlights, selections, and focus states
    pub accent: Color,
    /// Success state color for confirmations
    pub success: Color,
    /// Error state color
    pub error: Color,
    /// Warning state color
    pub warning: Color,

    /// Primary text content color
    pub text: Color,
    /// Muted text color for help text and dim content
    pub text_muted: Color,

    /// Main background color
    pub background: Color,
    /// Highlight/selection background color
    pub highlight_bg: Color,

    /// One color per seat group, indexed by [`Group::index`]
    group_colors: [Color; Group::ALL.len()],
}

impl Theme {
    /// Detects the OS theme and returns the appropriate Theme.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::light(),
            // Fall back to dark theme for dark mode, unspecified, or errors
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::dark(),
        }
    }

    /// Resolves a theme from the configured mode.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::detect(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Creates a dark theme optimized for dark terminal backgrounds.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,

            text: Color::White,
            text_muted: Color::DarkGray,

            background: Color::Black,
            highlight_bg: Color::DarkGray,

            group_colors: [
                Color::Rgb(255, 140, 0),  // A - orange, visually set apart
                Color::Rgb(80, 160, 255), // B
                Color::Rgb(90, 200, 120), // C
                Color::Rgb(230, 90, 120), // D
                Color::Rgb(180, 120, 255),// E
                Color::Rgb(90, 200, 200), // F
                Color::Rgb(230, 200, 80), // G
                Color::Rgb(200, 140, 110),// H
            ],
        }
    }

    /// Creates a light theme optimized for light terminal backgrounds.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            accent: Color::Rgb(180, 100, 0),
            success: Color::Rgb(0, 128, 0),
            error: Color::Red,
            warning: Color::Rgb(200, 100, 0),

            text: Color::Black,
            text_muted: Color::Gray,

            background: Color::White,
            highlight_bg: Color::Rgb(230, 230, 230),

            group_colors: [
                Color::Rgb(200, 90, 0),   // A
                Color::Rgb(0, 90, 200),   // B
                Color::Rgb(0, 130, 60),   // C
                Color::Rgb(180, 30, 70),  // D
                Color::Rgb(120, 60, 190), // E
                Color::Rgb(0, 130, 130),  // F
                Color::Rgb(150, 120, 0),  // G
                Color::Rgb(140, 80, 50),  // H
            ],
        }
    }

    /// The display color for a seat group.
    #[must_use]
    pub const fn group_color(&self, group: Group) -> Color {
        self.group_colors[group.index()]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_dark() {
        let theme = Theme::dark();
        assert_eq!(theme.background, Color::Black);
        assert_eq!(theme.text, Color::White);
    }

    #[test]
    fn test_theme_light() {
        let theme = Theme::light();
        assert_eq!(theme.background, Color::White);
        assert_eq!(theme.text, Color::Black);
    }

    #[test]
    fn test_from_mode_explicit() {
        assert_eq!(Theme::from_mode(ThemeMode::Dark), Theme::dark());
        assert_eq!(Theme::from_mode(ThemeMode::Light), Theme::light());
    }

    #[test]
    fn test_group_colors_distinct() {
        let theme = Theme::dark();
        for a in Group::ALL {
            for b in Group::ALL {
                if a != b {
                    assert_ne!(
                        theme.group_color(a),
                        theme.group_color(b),
                        "{a} and {b} share a color"
                    );
                }
            }
        }
    }
}

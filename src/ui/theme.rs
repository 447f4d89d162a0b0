//! Color theme definitions for the picker overlay
//!
//! The overlay never looks styles up globally; a `Theme` is handed to it.

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

/// Named theme presets selectable from the configuration file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// Light text on a dark terminal
    #[default]
    Dark,
    /// Dark text on a light terminal
    Light,
}

/// Theme configuration for the overlay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Background of the dialog box
    pub dialog_bg: Color,
    /// Color for the dialog border
    pub border: Color,
    /// Color for the dialog title
    pub title: Color,
    /// Foreground for the query line
    pub input: Color,
    /// Foreground for unfocused items
    pub item: Color,
    /// Background color for the focused item
    pub focus_bg: Color,
    /// Foreground color for the focused item
    pub focus_fg: Color,
    /// Color for shortcode hints and dimmed text
    pub dimmed: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl From<ThemeName> for Theme {
    fn from(name: ThemeName) -> Self {
        match name {
            ThemeName::Dark => Self::dark(),
            ThemeName::Light => Self::light(),
        }
    }
}

impl Theme {
    /// Create a dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            dialog_bg: Color::Reset,
            border: Color::DarkGray,
            title: Color::Cyan,
            input: Color::White,
            item: Color::Gray,
            focus_bg: Color::Blue,
            focus_fg: Color::White,
            dimmed: Color::DarkGray,
        }
    }

    /// Create a light theme
    #[must_use]
    pub const fn light() -> Self {
        Self {
            dialog_bg: Color::Reset,
            border: Color::Gray,
            title: Color::Blue,
            input: Color::Black,
            item: Color::Black,
            focus_bg: Color::LightBlue,
            focus_fg: Color::Black,
            dimmed: Color::Gray,
        }
    }

    /// Style for the dialog body
    #[must_use]
    pub fn dialog_style(&self) -> Style {
        Style::default().bg(self.dialog_bg)
    }

    /// Style for borders
    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style for the dialog title
    #[must_use]
    pub fn title_style(&self) -> Style {
        Style::default().fg(self.title).add_modifier(Modifier::BOLD)
    }

    /// Style for the query line
    #[must_use]
    pub fn input_style(&self) -> Style {
        Style::default().fg(self.input)
    }

    /// Style for unfocused items
    #[must_use]
    pub fn item_style(&self) -> Style {
        Style::default().fg(self.item)
    }

    /// Style for the focused item
    #[must_use]
    pub fn focus_style(&self) -> Style {
        Style::default()
            .bg(self.focus_bg)
            .fg(self.focus_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for dimmed text
    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed)
    }
}

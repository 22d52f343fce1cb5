//! Color palette using ratatui colors
//!
//! The surface and actor colors come from the configuration as RGB triples; the
//! status bar colors are fixed.

use crate::config::Config;
use ratatui::style::{Color, Style};

/// Colors used to render a frame
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    /// Fill for the whole canvas, applied on every clear
    pub background: Color,

    /// Actor circle
    pub actor: Color,

    /// Status line background
    pub status_bg: Color,

    /// Status line text
    pub status_fg: Color,
}

impl Default for Palette {
    /// Black surface with a green actor
    fn default() -> Self {
        Self {
            background: Color::Rgb(0, 0, 0),
            actor: Color::Rgb(0, 255, 0),
            status_bg: Color::DarkGray,
            status_fg: Color::White,
        }
    }
}

impl Palette {
    /// Build the palette described by a configuration
    pub fn from_config(config: &Config) -> Self {
        Self {
            background: rgb(config.surface.background),
            actor: rgb(config.actor.color),
            ..Self::default()
        }
    }

    pub fn status_style(&self) -> Style {
        Style::default().bg(self.status_bg).fg(self.status_fg)
    }
}

fn rgb([r, g, b]: [u8; 3]) -> Color {
    Color::Rgb(r, g, b)
}

//! Theme palettes.
//!
//! Every `ThemeId` maps to a fixed palette of colors and style helpers. The
//! system theme leans on the terminal's own colors (`Color::Reset`) instead
//! of forcing a palette; light and dark mirror the original site's
//! backgrounds; doom is fire on near-black.

use crate::theme::ThemeId;
use ratatui::style::{Color, Modifier, Style};

pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
    pub dim: Color,
    pub border: Color,
    pub bar_bg: Color,
}

impl Palette {
    pub fn of(theme: ThemeId) -> Self {
        match theme {
            ThemeId::Light => Self {
                bg: Color::Rgb(0xf2, 0xf2, 0xf2),
                fg: Color::Rgb(0x18, 0x18, 0x18),
                accent: Color::Rgb(0x1d, 0x4e, 0xd8),
                dim: Color::Rgb(0x6b, 0x6b, 0x6b),
                border: Color::Rgb(0xc0, 0xc0, 0xc0),
                bar_bg: Color::Rgb(0xdd, 0xdd, 0xdd),
            },
            ThemeId::Dark => Self {
                bg: Color::Rgb(0x0e, 0x0e, 0x0e),
                fg: Color::Rgb(0xe5, 0xe5, 0xe5),
                accent: Color::Cyan,
                dim: Color::DarkGray,
                border: Color::Rgb(0x3a, 0x3a, 0x3a),
                bar_bg: Color::Rgb(0x19, 0x19, 0x19),
            },
            ThemeId::System => Self {
                bg: Color::Reset,
                fg: Color::Reset,
                accent: Color::Cyan,
                dim: Color::DarkGray,
                border: Color::DarkGray,
                bar_bg: Color::DarkGray,
            },
            ThemeId::Doom => Self {
                bg: Color::Rgb(0x1a, 0x08, 0x08),
                fg: Color::Rgb(0xff, 0xb0, 0x66),
                accent: Color::Rgb(0xff, 0x33, 0x00),
                dim: Color::Rgb(0x8a, 0x4a, 0x30),
                border: Color::Rgb(0xaa, 0x22, 0x00),
                bar_bg: Color::Rgb(0x33, 0x0c, 0x06),
            },
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.fg)
    }

    pub fn dim(&self) -> Style {
        Style::default().fg(self.dim)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn selected(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn status_bar(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bar_bg)
    }

    pub fn tab_active(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }
}

/// Language swatch colors, matching the original site's table of GitHub
/// language colors.
pub fn language_color(language: &str) -> Color {
    match language {
        "JavaScript" => Color::Rgb(0xf1, 0xe0, 0x5a),
        "TypeScript" => Color::Rgb(0x31, 0x78, 0xc6),
        "HTML" => Color::Rgb(0xe3, 0x4c, 0x26),
        "CSS" => Color::Rgb(0x56, 0x3d, 0x7c),
        "Python" => Color::Rgb(0x35, 0x72, 0xa5),
        "Java" => Color::Rgb(0xb0, 0x72, 0x19),
        "Go" => Color::Rgb(0x00, 0xad, 0xd8),
        "Rust" => Color::Rgb(0xde, 0xa5, 0x84),
        "C" => Color::Rgb(0x55, 0x55, 0x55),
        "C++" => Color::Rgb(0xf3, 0x4b, 0x7d),
        "C#" => Color::Rgb(0x17, 0x86, 0x00),
        "Ruby" => Color::Rgb(0x70, 0x15, 0x16),
        "PHP" => Color::Rgb(0x4f, 0x5d, 0x95),
        "Swift" => Color::Rgb(0xff, 0xac, 0x45),
        "Kotlin" => Color::Rgb(0xf1, 0x8e, 0x33),
        "Solidity" => Color::Rgb(0xaa, 0x67, 0x46),
        _ => Color::Rgb(0x85, 0x85, 0x85),
    }
}

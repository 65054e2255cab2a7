//! Color palettes for the two themes.

use ratatui::style::Color;

use crate::state::theme::ThemeSetting;

/// Resolved colors for the active theme.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    /// Secondary text.
    pub dim: Color,
    pub accent: Color,
    pub border: Color,
    pub error: Color,
    pub success: Color,
    /// Background for highlighted rows (menu selection, buttons).
    pub highlight_bg: Color,
}

impl Palette {
    pub fn for_theme(theme: ThemeSetting) -> Self {
        match theme {
            ThemeSetting::Dark => DARK,
            ThemeSetting::Light => LIGHT,
        }
    }
}

const DARK: Palette = Palette {
    bg: Color::Rgb(13, 17, 23),
    fg: Color::Rgb(220, 223, 228),
    dim: Color::Rgb(125, 133, 144),
    accent: Color::Rgb(88, 166, 255),
    border: Color::Rgb(48, 54, 61),
    error: Color::Rgb(248, 81, 73),
    success: Color::Rgb(4, 181, 117),
    highlight_bg: Color::Rgb(33, 38, 45),
};

const LIGHT: Palette = Palette {
    bg: Color::Rgb(246, 248, 250),
    fg: Color::Rgb(31, 35, 40),
    dim: Color::Rgb(101, 109, 118),
    accent: Color::Rgb(9, 105, 218),
    border: Color::Rgb(208, 215, 222),
    error: Color::Rgb(207, 34, 46),
    success: Color::Rgb(26, 127, 55),
    highlight_bg: Color::Rgb(234, 238, 242),
};

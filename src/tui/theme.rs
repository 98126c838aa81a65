use ratatui::style::Color;

use crate::config::ViewConfig;

/// Colours for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub on_accent: Color,
    pub bar_bg: Color,
    pub error: Color,
    pub success: Color,
    pub tag: Color,
}

const DARK: Palette = Palette {
    text: Color::Rgb(250, 250, 250),
    muted: Color::Rgb(113, 113, 122),
    accent: Color::Rgb(16, 185, 129),
    on_accent: Color::Rgb(250, 250, 250),
    bar_bg: Color::Rgb(24, 24, 27),
    error: Color::Rgb(239, 68, 68),
    success: Color::Rgb(52, 211, 153),
    tag: Color::Rgb(96, 165, 250),
};

const LIGHT: Palette = Palette {
    text: Color::Rgb(24, 24, 27),
    muted: Color::Rgb(113, 113, 122),
    accent: Color::Rgb(5, 150, 105),
    on_accent: Color::Rgb(255, 255, 255),
    bar_bg: Color::Rgb(228, 228, 231),
    error: Color::Rgb(220, 38, 38),
    success: Color::Rgb(4, 120, 87),
    tag: Color::Rgb(37, 99, 235),
};

impl Palette {
    pub fn for_view(view: &ViewConfig) -> Self {
        if view.dark_theme { DARK } else { LIGHT }
    }
}

//! Light and dark color palettes

use ratatui::style::{Color, Modifier, Style};

use crate::config::Theme;

/// Colors used by every view for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub highlight_bg: Color,
    pub highlight_fg: Color,
    pub selected: Color,
    pub error: Color,
    pub success: Color,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        background: Color::Rgb(245, 245, 245),
        foreground: Color::Rgb(33, 33, 33),
        muted: Color::Rgb(117, 117, 117),
        accent: Color::Rgb(25, 118, 210),
        border: Color::Rgb(189, 189, 189),
        highlight_bg: Color::Rgb(187, 222, 251),
        highlight_fg: Color::Rgb(13, 71, 161),
        selected: Color::Rgb(230, 81, 0),
        error: Color::Rgb(198, 40, 40),
        success: Color::Rgb(46, 125, 50),
    };

    pub const DARK: Palette = Palette {
        background: Color::Rgb(30, 30, 30),
        foreground: Color::Rgb(224, 224, 224),
        muted: Color::Rgb(158, 158, 158),
        accent: Color::Rgb(100, 181, 246),
        border: Color::Rgb(80, 80, 80),
        highlight_bg: Color::Rgb(55, 71, 79),
        highlight_fg: Color::Rgb(255, 255, 255),
        selected: Color::Rgb(255, 183, 77),
        error: Color::Rgb(239, 83, 80),
        success: Color::Rgb(129, 199, 132),
    };

    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::LIGHT,
            Theme::Dark => Self::DARK,
        }
    }

    /// Base text style on the theme background
    pub fn base(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }

    pub fn border_style(&self, focused: bool) -> Style {
        let color = if focused { self.accent } else { self.border };
        Style::default().fg(color).bg(self.background)
    }

    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .bg(self.background)
            .add_modifier(Modifier::BOLD)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted).bg(self.background)
    }

    pub fn highlight_style(&self) -> Style {
        Style::default()
            .fg(self.highlight_fg)
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }
}

/// Label for the theme toggle hint: names the theme you would switch to
pub fn toggle_label(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "Dark Mode",
        Theme::Dark => "Light Mode",
    }
}

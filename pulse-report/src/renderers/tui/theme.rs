//! TUI colors, styles and key hints

use ratatui::{
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
};

/// Color scheme of the terminal dashboard
pub struct TuiTheme;

impl TuiTheme {
    pub const FOCUS: Color = Color::Rgb(97, 175, 239);
    pub const SUCCESS: Color = Color::Rgb(152, 195, 121);
    pub const WARNING: Color = Color::Rgb(229, 192, 123);
    pub const ERROR: Color = Color::Rgb(224, 108, 117);

    pub const TEXT_PRIMARY: Color = Color::Rgb(171, 178, 191);
    pub const TEXT_SECONDARY: Color = Color::Rgb(92, 99, 112);
    pub const PANEL_BACKGROUND: Color = Color::Rgb(44, 62, 80);
    pub const BUTTON: Color = Color::Rgb(52, 152, 219);
    pub const BORDER_NORMAL: Color = Color::Rgb(92, 99, 112);

    pub fn primary_text_style() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn secondary_text_style() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn success_style() -> Style {
        Style::default().fg(Self::SUCCESS).add_modifier(Modifier::BOLD)
    }

    pub fn warning_style() -> Style {
        Style::default().fg(Self::WARNING).add_modifier(Modifier::BOLD)
    }

    pub fn error_style() -> Style {
        Style::default().fg(Self::ERROR).add_modifier(Modifier::BOLD)
    }

    /// Input field style, highlighted when it has focus
    pub fn field_style(focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::White)
        }
    }

    pub fn button_style(focused: bool, enabled: bool) -> Style {
        match (focused, enabled) {
            (true, true) => Style::default()
                .bg(Self::FOCUS)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            (false, true) => Style::default().bg(Self::BUTTON).fg(Color::White),
            (_, false) => Style::default().bg(Color::Black).fg(Self::TEXT_SECONDARY),
        }
    }

    /// Left pane block, styled after the page's dark sidebar
    pub fn controls_block(title: &str) -> Block<'_> {
        Block::default()
            .title(format!(" {} ", title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Self::BORDER_NORMAL))
            .title_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
            .style(Style::default().bg(Self::PANEL_BACKGROUND))
    }

    pub fn output_block(title: &str, is_loading: bool) -> Block<'_> {
        let border_style = if is_loading {
            Style::default().fg(Self::WARNING)
        } else {
            Style::default().fg(Self::BORDER_NORMAL)
        };
        Block::default()
            .title(format!(" {} ", title))
            .borders(Borders::ALL)
            .border_style(border_style)
            .title_style(Style::default().fg(Self::FOCUS).add_modifier(Modifier::BOLD))
    }

    pub fn normal_block(title: &str) -> Block<'_> {
        Block::default()
            .title(format!(" {} ", title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Self::BORDER_NORMAL))
            .title_style(Style::default().fg(Self::TEXT_PRIMARY))
    }
}

pub struct UiSymbols;

impl UiSymbols {
    pub const FOCUSED_INDICATOR: &'static str = "►";
    pub const SUCCESS: &'static str = "✓";
    pub const ERROR: &'static str = "✗";
    pub const WARNING: &'static str = "⚠";
    pub const BULLET: &'static str = "•";
    pub const LOADING: &'static str = "⏳";
}

pub struct KeyHints;

impl KeyHints {
    pub fn format_key_hint(key: &str, description: &str) -> String {
        format!("[{}] {}", key, description)
    }

    pub fn format_key_hints(hints: &[(&str, &str)]) -> String {
        hints
            .iter()
            .map(|(key, desc)| Self::format_key_hint(key, desc))
            .collect::<Vec<_>>()
            .join(" | ")
    }

    pub fn dashboard_help() -> Vec<(&'static str, &'static str)> {
        vec![
            ("Tab", "Next field"),
            ("←→", "Stream"),
            ("Enter", "Generate"),
            ("↑↓", "Scroll"),
            ("Ctrl+S", "Save page"),
            ("q", "Quit"),
        ]
    }
}

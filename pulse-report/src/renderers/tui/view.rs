use super::app::{ActionFeedback, FeedbackType, Field, TuiApp};
use super::theme::{KeyHints, TuiTheme, UiSymbols};
use crate::dashboard::{DashboardState, Display};
use crate::types::ReportKind;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Main UI drawing function
pub fn draw(f: &mut Frame, app: &TuiApp, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(3)])
        .split(f.area());

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(chunks[0]);

    draw_controls(f, app, state, panes[0]);
    draw_output(f, app, state, panes[1]);
    draw_status_bar(f, app.action_feedback.as_ref(), chunks[1]);
}

fn draw_controls(f: &mut Frame, app: &TuiApp, state: &DashboardState, area: Rect) {
    let field_line = |field: Field, label: &str, value: &str| {
        let focused = app.focus == field;
        let indicator = if focused { UiSymbols::FOCUSED_INDICATOR } else { " " };
        let shown = if value.is_empty() { "yyyy-mm-dd" } else { value };
        Line::from(vec![
            Span::raw(format!("{} {:<16}", indicator, label)),
            Span::styled(shown.to_string(), TuiTheme::field_style(focused)),
        ])
    };

    let mut lines = vec![
        Line::from(""),
        field_line(Field::FromDate, "From:", &state.from_date),
        Line::from(""),
        field_line(Field::ToDate, "To:", &state.to_date),
        Line::from(""),
        field_line(
            Field::Stream,
            "Product Stream:",
            &format!("‹ {} ›", state.selected_stream.label()),
        ),
        Line::from(""),
    ];

    for kind in ReportKind::ALL {
        let focused = app.focus == Field::Action(kind);
        let style = TuiTheme::button_style(focused, state.is_enabled(kind));
        lines.push(Line::from(""));
        lines.push(
            Line::from(Span::styled(format!("  {}  ", kind.button_label()), style))
                .alignment(Alignment::Center),
        );
    }

    let controls = Paragraph::new(lines).block(TuiTheme::controls_block("Ping Pulse"));
    f.render_widget(controls, area);
}

fn draw_output(f: &mut Frame, app: &TuiApp, state: &DashboardState, area: Rect) {
    let display = state.display();
    let text = match display {
        Display::Loading => format!("{} {}", UiSymbols::LOADING, display.text()),
        Display::Placeholder => display.text().to_string(),
        Display::Html(html) => terminal_text(html),
    };

    let style = match display {
        Display::Placeholder => TuiTheme::secondary_text_style(),
        _ => TuiTheme::primary_text_style(),
    };

    let output = Paragraph::new(text)
        .style(style)
        .wrap(Wrap { trim: false })
        .scroll((app.output_scroll, 0))
        .block(TuiTheme::output_block(&state.header_text, state.is_loading));
    f.render_widget(output, area);
}

fn draw_status_bar(f: &mut Frame, feedback: Option<&ActionFeedback>, area: Rect) {
    let status = match feedback {
        Some(feedback) => {
            let (style, symbol) = match feedback.feedback_type {
                FeedbackType::Success => (TuiTheme::success_style(), UiSymbols::SUCCESS),
                FeedbackType::Warning => (TuiTheme::warning_style(), UiSymbols::WARNING),
                FeedbackType::Error => (TuiTheme::error_style(), UiSymbols::ERROR),
            };
            Paragraph::new(format!("{} {}", symbol, feedback.message)).style(style)
        }
        None => Paragraph::new(KeyHints::format_key_hints(&KeyHints::dashboard_help()))
            .style(TuiTheme::secondary_text_style()),
    };

    f.render_widget(
        status
            .alignment(Alignment::Center)
            .block(TuiTheme::normal_block("Keys")),
        area,
    );
}

/// Flatten a report fragment into readable terminal text: list items become
/// bullet lines, table rows become ` | `-separated lines, other tags are dropped.
pub fn terminal_text(html: &str) -> String {
    let mut out = String::new();
    let mut rest = html;

    while let Some(start) = rest.find('<') {
        out.push_str(&rest[..start]);
        rest = &rest[start..];

        // a bare `<` in text (as in `a < b`) is not a tag
        let opens_tag = rest[1..]
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '/' || c == '!');
        let Some(len) = rest.find('>').filter(|_| opens_tag) else {
            out.push('<');
            rest = &rest[1..];
            continue;
        };
        let tag = &rest[1..len];
        rest = &rest[len + 1..];

        let closing = tag.starts_with('/');
        let name = tag
            .trim_start_matches('/')
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match (name.as_str(), closing) {
            ("ul", false) | ("br", _) => start_line(&mut out),
            ("li", false) => {
                start_line(&mut out);
                out.push_str(&format!("  {} ", UiSymbols::BULLET));
            }
            ("li", true) | ("tr", true) => out.push('\n'),
            ("th", false) | ("td", false) => {
                if !(out.is_empty() || out.ends_with('\n')) {
                    out.push_str(" | ");
                }
            }
            _ => {}
        }
    }
    out.push_str(rest);

    unescape(out.trim_end())
}

fn start_line(out: &mut String) {
    if !(out.is_empty() || out.ends_with('\n')) {
        out.push('\n');
    }
}

fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#x27;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::{update, Msg};
    use ratatui::{backend::TestBackend, Terminal};
    use std::path::PathBuf;

    #[test]
    fn test_terminal_text_for_lists() {
        let html = "<strong>A</strong>:<ul><li>x</li><li>y</li></ul><strong>B</strong>:<ul><li>z</li></ul>";
        assert_eq!(terminal_text(html), "A:\n  • x\n  • y\nB:\n  • z");
    }

    #[test]
    fn test_terminal_text_for_tables() {
        let html = "<table border=\"1\"><thead><tr><th style=\"text-align:left;\">Product</th><th>Total</th></tr></thead>\
                    <tbody><tr><th style=\"text-align:left;\"><strong>AIC</strong></th><td>4</td></tr></tbody></table>";
        assert_eq!(terminal_text(html), "Product | Total\nAIC | 4");
    }

    #[test]
    fn test_terminal_text_plain_and_entities() {
        assert_eq!(terminal_text("Error fetching data"), "Error fetching data");
        assert_eq!(terminal_text("<li>R&amp;D &lt;beta&gt;</li>"), "  • R&D <beta>");
    }

    #[test]
    fn test_terminal_text_keeps_bare_angle_brackets() {
        assert_eq!(terminal_text("<li>a < b</li>"), "  • a < b");
        assert_eq!(terminal_text("x <3 and y > 2"), "x <3 and y > 2");
        assert_eq!(terminal_text("<li>unterminated <b"), "  • unterminated <b");
    }

    #[test]
    fn test_draw_shows_header_and_buttons() {
        let mut state = DashboardState::new();
        update(&mut state, Msg::SetFromDate("2024-01-01".into()));
        let app = TuiApp::new(PathBuf::from("pulse.html"));

        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|f| draw(f, &app, &state)).unwrap();

        let buffer = terminal.backend().buffer();
        let screen: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(screen.contains("Ping Pulse"));
        assert!(screen.contains("Here is the news Identians!!!"));
        assert!(screen.contains("2024-01-01"));
        assert!(screen.contains("Generate Holidays"));
        assert!(screen.contains("Generated output will appear here."));
    }
}

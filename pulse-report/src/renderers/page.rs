//! Standalone HTML page mirroring the two-pane dashboard

use super::DashboardRenderer;
use crate::dashboard::{DashboardState, Display};
use crate::error::Result;
use crate::formatter::html::escape;
use crate::types::{ReportKind, Stream};
use chrono::{DateTime, Local};
use std::fs;
use std::path::Path;

const PAGE_STYLES: &str = "\
body { margin: 0; font-family: sans-serif; }
.dashboard { display: flex; height: 100vh; }
.controls { width: 30%; padding: 10px; background-color: #2c3e50; color: white; display: flex; flex-direction: column; justify-content: space-between; }
.controls h1 { text-align: center; }
.controls input, .controls select { margin-left: 20px; padding: 5px; border-radius: 4px; border: 1px solid #ccc; }
.actions { display: flex; flex-direction: column; gap: 10px; }
.actions button { padding: 10px; border-radius: 4px; background-color: #3498db; color: white; border: none; cursor: pointer; }
.actions button[disabled] { background-color: #7f8c8d; cursor: not-allowed; }
.output { width: 70%; padding: 20px; overflow-y: auto; }
.output pre { white-space: pre-wrap; }
footer { font-size: 0.8em; color: #7f8c8d; }
";

/// HTML page renderer for dashboard snapshots
pub struct PageRenderer {
    /// Whether to embed the stylesheet
    pub include_styles: bool,
    generated_at: Option<DateTime<Local>>,
}

impl PageRenderer {
    pub fn new() -> Self {
        Self {
            include_styles: true,
            generated_at: None,
        }
    }

    pub fn without_styles() -> Self {
        Self {
            include_styles: false,
            generated_at: None,
        }
    }

    /// Stamp the snapshot with the given time in a footer
    pub fn with_timestamp(mut self, at: DateTime<Local>) -> Self {
        self.generated_at = Some(at);
        self
    }

    /// Render the state and write it to `path`
    pub fn save(&self, state: &DashboardState, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.render(state))?;
        tracing::debug!(path = %path.display(), "dashboard page written");
        Ok(())
    }
}

impl Default for PageRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardRenderer for PageRenderer {
    fn render(&self, state: &DashboardState) -> String {
        let mut html = String::new();

        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
        html.push_str("<title>Ping Pulse</title>\n");
        if self.include_styles {
            html.push_str("<style>\n");
            html.push_str(PAGE_STYLES);
            html.push_str("</style>\n");
        }
        html.push_str("</head>\n<body>\n<div class=\"dashboard\">\n");
        html.push_str(&render_controls(state));
        html.push_str(&render_output(state));
        html.push_str("</div>\n");

        if let Some(at) = &self.generated_at {
            html.push_str(&format!(
                "<footer>Snapshot taken {}</footer>\n",
                at.format("%Y-%m-%d %H:%M:%S")
            ));
        }

        html.push_str("</body>\n</html>\n");
        html
    }
}

fn render_controls(state: &DashboardState) -> String {
    let mut html = String::from("<div class=\"controls\">\n<h1>Ping Pulse</h1>\n<div>\n");

    html.push_str(&format!(
        "<div><label>From: <input type=\"date\" id=\"fromDate\" value=\"{}\"></label></div>\n",
        escape(&state.from_date)
    ));
    html.push_str(&format!(
        "<div><label>To: <input type=\"date\" id=\"toDate\" value=\"{}\"></label></div>\n",
        escape(&state.to_date)
    ));

    html.push_str("<div><label>Product Stream: <select id=\"stream\">\n");
    for stream in Stream::ALL {
        html.push_str(&render_option(stream, stream == state.selected_stream));
    }
    html.push_str("</select></label></div>\n</div>\n");

    html.push_str("<div class=\"actions\">\n");
    for kind in ReportKind::ALL {
        let disabled = if state.is_enabled(kind) { "" } else { " disabled" };
        html.push_str(&format!(
            "<button type=\"button\" data-report=\"{}\"{}>{}</button>\n",
            kind.name(),
            disabled,
            kind.button_label()
        ));
    }
    html.push_str("</div>\n</div>\n");
    html
}

fn render_option(stream: Stream, selected: bool) -> String {
    format!(
        "<option value=\"{}\"{}>{}</option>\n",
        escape(stream.wire_value()),
        if selected { " selected" } else { "" },
        escape(stream.label())
    )
}

fn render_output(state: &DashboardState) -> String {
    let body = match state.display() {
        Display::Loading => "<p>Loading...</p>".to_string(),
        // report HTML is inserted as-is
        display => format!("<pre>{}</pre>", display.text()),
    };

    format!(
        "<div class=\"output\">\n<h2>{}</h2>\n{}\n</div>\n",
        escape(&state.header_text),
        body
    )
}

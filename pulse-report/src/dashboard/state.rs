use crate::types::{Query, ReportKind, Stream};

/// Header shown before any report is requested
pub const INITIAL_HEADER: &str = "Here is the news Identians!!!";

/// Output pane text before the first report settles
pub const PLACEHOLDER_TEXT: &str = "Generated output will appear here.";

/// Indicator shown instead of the output while a request is pending
pub const LOADING_TEXT: &str = "Loading...";

/// Everything the dashboard displays
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardState {
    pub from_date: String,
    pub to_date: String,
    pub selected_stream: Stream,
    pub header_text: String,
    /// Rendered report, replaced wholesale by every settlement
    pub output_html: Option<String>,
    pub is_loading: bool,
    next_request_id: u64,
}

/// What the output pane shows right now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display<'a> {
    Loading,
    Placeholder,
    Html(&'a str),
}

impl Display<'_> {
    /// Text of the output pane; HTML is returned raw
    pub fn text(&self) -> &str {
        match self {
            Display::Loading => LOADING_TEXT,
            Display::Placeholder => PLACEHOLDER_TEXT,
            Display::Html(html) => html,
        }
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            from_date: String::new(),
            to_date: String::new(),
            selected_stream: Stream::All,
            header_text: INITIAL_HEADER.to_string(),
            output_html: None,
            is_loading: false,
            next_request_id: 1,
        }
    }

    /// Snapshot of the form inputs
    pub fn query(&self) -> Query {
        Query {
            from_date: self.from_date.clone(),
            to_date: self.to_date.clone(),
            stream: self.selected_stream,
        }
    }

    /// Loading wins over stale output; an empty fragment falls back to the placeholder
    pub fn display(&self) -> Display<'_> {
        if self.is_loading {
            return Display::Loading;
        }
        match self.output_html.as_deref() {
            Some(html) if !html.is_empty() => Display::Html(html),
            _ => Display::Placeholder,
        }
    }

    /// Only the holidays button is disabled while a request is pending
    pub fn is_enabled(&self, kind: ReportKind) -> bool {
        !(kind == ReportKind::Holidays && self.is_loading)
    }

    pub(crate) fn allocate_request_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }
}

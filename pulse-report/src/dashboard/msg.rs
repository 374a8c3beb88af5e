use crate::types::{ReportKind, Stream};

/// Messages accepted by the dashboard reducer (unidirectional flow)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    SetFromDate(String),
    SetToDate(String),
    SelectStream(Stream),
    Generate(ReportKind),
    Settled(Settlement),
}

/// Completion of one report request, successful or not
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settlement {
    pub request_id: u64,
    pub kind: ReportKind,
    /// Rendered HTML, or the error text for logging
    pub outcome: Result<String, String>,
}

impl Settlement {
    pub fn succeeded(&self) -> bool {
        self.outcome.is_ok()
    }
}

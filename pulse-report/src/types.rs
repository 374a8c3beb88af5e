use crate::error::{ReportError, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Product stream filter applied to updates, metrics and risk reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Stream {
    #[default]
    All,
    IdentityTrust,
    P1as,
    Iops,
    MtSaas,
    Software,
    AiAnalyticsDataPlatform,
    Aic,
}

impl Stream {
    /// Every stream in selector order
    pub const ALL: [Stream; 8] = [
        Stream::All,
        Stream::IdentityTrust,
        Stream::P1as,
        Stream::Iops,
        Stream::MtSaas,
        Stream::Software,
        Stream::AiAnalyticsDataPlatform,
        Stream::Aic,
    ];

    /// Value sent as `selected_stream` and used as the key in updates responses
    pub fn wire_value(self) -> &'static str {
        match self {
            Stream::All => "All",
            Stream::IdentityTrust => "Identity Trust",
            Stream::P1as => "P1AS",
            Stream::Iops => "iOPS",
            Stream::MtSaas => "MT SaaS",
            Stream::Software => "Software",
            Stream::AiAnalyticsDataPlatform => "AI / Analytics Data Platform",
            Stream::Aic => "AIC",
        }
    }

    /// Human readable label shown in the stream selector
    pub fn label(self) -> &'static str {
        match self {
            Stream::MtSaas => "MT SAAS",
            Stream::AiAnalyticsDataPlatform => "AI/Analytics Data Platform",
            other => other.wire_value(),
        }
    }

    pub fn is_all(self) -> bool {
        self == Stream::All
    }

    /// Next stream in selector order, wrapping around
    pub fn next(self) -> Self {
        let idx = self.position();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous stream in selector order, wrapping around
    pub fn previous(self) -> Self {
        let idx = self.position();
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_value())
    }
}

impl FromStr for Stream {
    type Err = ReportError;

    /// Accepts either the wire value or the selector label, ignoring case
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|stream| {
                stream.wire_value().eq_ignore_ascii_case(wanted)
                    || stream.label().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| {
                ReportError::general(format!(
                    "Unknown product stream '{}'. Available streams: {}",
                    s,
                    Self::ALL
                        .iter()
                        .map(|s| s.wire_value())
                        .collect::<Vec<_>>()
                        .join(", ")
                ))
            })
    }
}

/// Inputs of one report request, exactly as entered in the form
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Query {
    pub from_date: String,
    pub to_date: String,
    pub stream: Stream,
}

impl Query {
    pub fn new<S: Into<String>>(from_date: S, to_date: S, stream: Stream) -> Self {
        Self {
            from_date: from_date.into(),
            to_date: to_date.into(),
            stream,
        }
    }
}

/// The four reports the backend can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    Updates,
    Metrics,
    Holidays,
    Risk,
}

impl ReportKind {
    /// Report kinds in the order their buttons appear on the dashboard
    pub const ALL: [ReportKind; 4] = [
        ReportKind::Updates,
        ReportKind::Risk,
        ReportKind::Metrics,
        ReportKind::Holidays,
    ];

    /// Endpoint path on the backend origin
    pub fn path(self) -> &'static str {
        match self {
            ReportKind::Updates => "/updates",
            ReportKind::Metrics => "/metrics",
            ReportKind::Holidays => "/holidays",
            ReportKind::Risk => "/risk",
        }
    }

    /// Header line displayed as soon as the report is requested
    pub fn header_text(self) -> &'static str {
        match self {
            ReportKind::Updates => "Here is the Team Updates Identians!!!",
            ReportKind::Metrics => "Here is the Metrics Identians!!!",
            ReportKind::Holidays => "Here is the Holidays Identians!!!",
            ReportKind::Risk => "Here is the Risk/Delayed Features Identians!!!",
        }
    }

    pub fn button_label(self) -> &'static str {
        match self {
            ReportKind::Updates => "Generate Team Updates",
            ReportKind::Metrics => "Generate Metrics",
            ReportKind::Holidays => "Generate Holidays",
            ReportKind::Risk => "Generate Risk/Delayed Features",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ReportKind::Updates => "updates",
            ReportKind::Metrics => "metrics",
            ReportKind::Holidays => "holidays",
            ReportKind::Risk => "risk",
        }
    }

    /// Holidays are not filtered server-side, so the stream is never sent for them
    pub fn sends_stream(self) -> bool {
        !matches!(self, ReportKind::Holidays)
    }

    /// Build the JSON body for this report
    pub fn request_body(self, query: &Query) -> ReportRequest<'_> {
        ReportRequest {
            from_date: &query.from_date,
            to_date: &query.to_date,
            selected_stream: self.sends_stream().then(|| query.stream.wire_value()),
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ReportKind {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "updates" | "newsletter" => Ok(ReportKind::Updates),
            "metrics" => Ok(ReportKind::Metrics),
            "holidays" => Ok(ReportKind::Holidays),
            "risk" => Ok(ReportKind::Risk),
            other => Err(ReportError::general(format!(
                "Unknown report kind '{}'. Available kinds: updates, metrics, holidays, risk",
                other
            ))),
        }
    }
}

/// Wire body posted to every report endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRequest<'a> {
    #[serde(rename = "fromDate")]
    pub from_date: &'a str,
    #[serde(rename = "toDate")]
    pub to_date: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_stream: Option<&'a str>,
}

/// Raw backend answer before decoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Check if the response indicates success (2xx status code)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

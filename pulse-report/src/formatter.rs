//! Shaping rules that turn backend JSON into HTML fragments
//!
//! Each report kind has one pure rule. Shaping never touches the network and
//! the same inputs always produce byte-identical output.

use crate::error::{ReportError, Result};
use crate::types::{Query, ReportKind};
use serde_json::{Map, Value};

/// Column names of the metrics table, after the leading `Product` column
pub const METRIC_COLUMNS: [&str; 9] = [
    "Total Epics",
    "Completed Epics",
    "In Progress Epics",
    "At Risk Epics",
    "Delayed Epics",
    "Not Started Epic",
    "Delivery Commit %",
    "Avg Epic Age",
    "Avg Epic Fix Time",
];

/// Options applied to every shaping rule
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatterConfig {
    /// Escape backend-supplied text before embedding it in markup
    pub escape_html: bool,
}

/// Formatter implementing the per-report shaping rules
#[derive(Debug, Clone, Default)]
pub struct ReportFormatter {
    config: FormatterConfig,
}

impl ReportFormatter {
    /// Create a formatter that embeds backend text verbatim
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a formatter with custom configuration
    pub fn with_config(config: FormatterConfig) -> Self {
        Self { config }
    }

    /// Shape a decoded response for the given report kind
    pub fn shape(&self, kind: ReportKind, query: &Query, result: &Value) -> Result<String> {
        match kind {
            ReportKind::Updates => self.updates(query, result),
            ReportKind::Metrics => self.metrics(result),
            ReportKind::Holidays | ReportKind::Risk => self.plain_list(kind, result),
        }
    }

    /// Updates: one bold label plus bullet list per stream
    fn updates(&self, query: &Query, result: &Value) -> Result<String> {
        let streams = as_object(ReportKind::Updates, result)?;

        if query.stream.is_all() {
            let mut html = String::new();
            for (stream, values) in streams {
                let items = as_array(ReportKind::Updates, values)?;
                self.push_labelled_list(&mut html, stream, items);
            }
            return Ok(html);
        }

        let key = query.stream.wire_value();
        let items: &[Value] = match streams.get(key) {
            Some(values) => as_array(ReportKind::Updates, values)?.as_slice(),
            None => &[],
        };

        if items.is_empty() {
            return Ok(format!("No data available for {}.", self.text(key)));
        }

        let mut html = String::new();
        self.push_labelled_list(&mut html, key, items);
        Ok(html)
    }

    /// Metrics: fixed header row, one body row per product in response order
    fn metrics(&self, result: &Value) -> Result<String> {
        let products = as_object(ReportKind::Metrics, result)?;

        let mut html = String::from(
            r#"<table border="1" style="border-collapse:collapse; width:100%;"><thead><tr><th style="text-align:left;">Product</th>"#,
        );
        for name in METRIC_COLUMNS {
            html.push_str(&format!("<th>{}</th>", name));
        }
        html.push_str("</tr></thead><tbody>");

        for (product, values) in products {
            let cells = as_array(ReportKind::Metrics, values)?;
            html.push_str(&format!(
                r#"<tr><th style="text-align:left;"><strong>{}</strong></th>"#,
                self.text(product)
            ));
            // no reconciliation against the header: cells land in backend order
            for cell in cells {
                html.push_str(&format!("<td>{}</td>", self.scalar(cell)));
            }
            html.push_str("</tr>");
        }

        html.push_str("</tbody></table>");
        Ok(html)
    }

    /// Holidays and risk: unbulleted list of strings in response order
    fn plain_list(&self, kind: ReportKind, result: &Value) -> Result<String> {
        let items = as_array(kind, result)?;

        let mut html = String::from(r#"<ul style="list-style: none; padding: 0;">"#);
        for item in items {
            html.push_str(&format!(
                r#"<li style="margin-bottom: 10px;">{}</li>"#,
                self.scalar(item)
            ));
        }
        html.push_str("</ul>");
        Ok(html)
    }

    fn push_labelled_list(&self, html: &mut String, label: &str, items: &[Value]) {
        html.push_str(&format!("<strong>{}</strong>:<ul>", self.text(label)));
        for item in items {
            html.push_str(&format!("<li>{}</li>", self.scalar(item)));
        }
        html.push_str("</ul>");
    }

    fn text(&self, raw: &str) -> String {
        if self.config.escape_html {
            html::escape(raw)
        } else {
            raw.to_string()
        }
    }

    fn scalar(&self, value: &Value) -> String {
        self.text(&html::display_value(value))
    }
}

fn as_object(kind: ReportKind, value: &Value) -> Result<&Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| ReportError::unexpected_shape(kind, "a JSON object keyed by name"))
}

fn as_array(kind: ReportKind, value: &Value) -> Result<&Vec<Value>> {
    value
        .as_array()
        .ok_or_else(|| ReportError::unexpected_shape(kind, "a JSON array"))
}

/// HTML text helpers
pub mod html {
    use serde_json::Value;

    /// Escape text for safe inclusion in element content and attribute values
    pub fn escape(text: &str) -> String {
        text.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&#x27;")
    }

    /// Render a JSON value the way a browser template literal would.
    ///
    /// Arrays join their elements with commas (null elements become empty),
    /// objects collapse to `[object Object]`.
    pub fn display_value(value: &Value) -> String {
        match value {
            Value::String(s) => s.clone(),
            Value::Number(n) => match n.as_f64() {
                Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => integral(f),
                _ => n.to_string(),
            },
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::Null => String::new(),
                    other => display_value(other),
                })
                .collect::<Vec<_>>()
                .join(","),
            Value::Object(_) => "[object Object]".to_string(),
            other => other.to_string(),
        }
    }

    // integral floats below 1e21 print in full, without exponent or fraction
    fn integral(f: f64) -> String {
        if f == 0.0 {
            "0".to_string()
        } else {
            format!("{:.0}", f)
        }
    }
}

/// Shell escaping utilities for generating command-line safe strings
pub mod shell {
    /// Escape shell arguments to handle single quotes properly
    pub fn escape_argument(arg: &str) -> String {
        // close the quote, add an escaped quote, reopen
        arg.replace('\'', "'\"'\"'")
    }

    /// Format a curl command with proper escaping
    pub fn format_curl_command(
        method: &str,
        url: &str,
        headers: &[(String, String)],
        body: Option<&str>,
    ) -> String {
        let mut command = format!("curl -X {} '{}'", method, escape_argument(url));

        for (key, value) in headers {
            command.push_str(&format!(
                " \\\n  -H '{}: {}'",
                escape_argument(key),
                escape_argument(value)
            ));
        }

        if let Some(body) = body {
            command.push_str(&format!(" \\\n  -d '{}'", escape_argument(body)));
        }

        command
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Stream;
    use serde_json::json;

    fn query(stream: Stream) -> Query {
        Query::new("2024-01-01", "2024-01-31", stream)
    }

    #[test]
    fn test_updates_all_streams_in_response_order() {
        let formatter = ReportFormatter::new();
        let result = json!({"A": ["x", "y"], "B": ["z"]});

        let html = formatter
            .shape(ReportKind::Updates, &query(Stream::All), &result)
            .unwrap();

        assert_eq!(
            html,
            "<strong>A</strong>:<ul><li>x</li><li>y</li></ul><strong>B</strong>:<ul><li>z</li></ul>"
        );
    }

    #[test]
    fn test_updates_keeps_backend_key_order() {
        let formatter = ReportFormatter::new();
        let result: Value = serde_json::from_str(r#"{"Zeta": ["1"], "Alpha": ["2"]}"#).unwrap();

        let html = formatter
            .shape(ReportKind::Updates, &query(Stream::All), &result)
            .unwrap();

        assert!(html.find("Zeta").unwrap() < html.find("Alpha").unwrap());
    }

    #[test]
    fn test_updates_single_stream_with_empty_list() {
        let formatter = ReportFormatter::new();
        let html = formatter
            .shape(ReportKind::Updates, &query(Stream::P1as), &json!({"P1AS": []}))
            .unwrap();
        assert_eq!(html, "No data available for P1AS.");
    }

    #[test]
    fn test_updates_single_stream_missing_key() {
        let formatter = ReportFormatter::new();
        let html = formatter
            .shape(
                ReportKind::Updates,
                &query(Stream::MtSaas),
                &json!({"P1AS": ["shipped"]}),
            )
            .unwrap();
        assert_eq!(html, "No data available for MT SaaS.");
    }

    #[test]
    fn test_updates_single_stream_ignores_other_keys() {
        let formatter = ReportFormatter::new();
        let result = json!({"P1AS": ["a"], "iOPS": ["b", "c"]});

        let html = formatter
            .shape(ReportKind::Updates, &query(Stream::Iops), &result)
            .unwrap();

        assert_eq!(html, "<strong>iOPS</strong>:<ul><li>b</li><li>c</li></ul>");
    }

    #[test]
    fn test_metrics_table() {
        let formatter = ReportFormatter::new();
        let result = json!({"Software": [1, 2, 3, 4, 5, 6, 7, 8, 9]});

        let html = formatter
            .shape(ReportKind::Metrics, &query(Stream::Software), &result)
            .unwrap();

        let header: String = METRIC_COLUMNS
            .iter()
            .map(|name| format!("<th>{}</th>", name))
            .collect();
        assert!(html.contains(&format!(
            r#"<th style="text-align:left;">Product</th>{}</tr></thead>"#,
            header
        )));
        assert!(html.contains(
            r#"<tr><th style="text-align:left;"><strong>Software</strong></th><td>1</td><td>2</td><td>3</td><td>4</td><td>5</td><td>6</td><td>7</td><td>8</td><td>9</td></tr>"#
        ));
        assert!(html.starts_with("<table"));
        assert!(html.ends_with("</tbody></table>"));
    }

    #[test]
    fn test_metrics_ignores_stream_and_keeps_short_rows() {
        let formatter = ReportFormatter::new();
        let result = json!({"AIC": [3, 1], "P1AS": [66.67, 50.0, "n/a"]});

        let html = formatter
            .shape(ReportKind::Metrics, &query(Stream::All), &result)
            .unwrap();

        assert!(html.contains("<strong>AIC</strong></th><td>3</td><td>1</td></tr>"));
        assert!(html.contains("<td>66.67</td><td>50</td><td>n/a</td></tr>"));
        assert!(html.find("AIC").unwrap() < html.find("P1AS").unwrap());
    }

    #[test]
    fn test_holidays_list() {
        let formatter = ReportFormatter::new();
        let html = formatter
            .shape(
                ReportKind::Holidays,
                &query(Stream::All),
                &json!(["New Year", "Labor Day"]),
            )
            .unwrap();

        assert_eq!(
            html,
            r#"<ul style="list-style: none; padding: 0;"><li style="margin-bottom: 10px;">New Year</li><li style="margin-bottom: 10px;">Labor Day</li></ul>"#
        );
    }

    #[test]
    fn test_risk_uses_holiday_rule() {
        let formatter = ReportFormatter::new();
        let items = json!(["Epic A delayed", "Epic B at risk"]);

        let risk = formatter
            .shape(ReportKind::Risk, &query(Stream::Aic), &items)
            .unwrap();
        let holidays = formatter
            .shape(ReportKind::Holidays, &query(Stream::All), &items)
            .unwrap();

        assert_eq!(risk, holidays);
    }

    #[test]
    fn test_wrong_shape_is_rejected() {
        let formatter = ReportFormatter::new();

        let err = formatter
            .shape(ReportKind::Holidays, &query(Stream::All), &json!({"a": 1}))
            .unwrap_err();
        assert!(matches!(
            err,
            ReportError::UnexpectedShape { kind: ReportKind::Holidays, .. }
        ));

        let err = formatter
            .shape(ReportKind::Metrics, &query(Stream::All), &json!({"AIC": 4}))
            .unwrap_err();
        assert!(matches!(
            err,
            ReportError::UnexpectedShape { kind: ReportKind::Metrics, .. }
        ));

        assert!(formatter
            .shape(ReportKind::Updates, &query(Stream::All), &json!(["x"]))
            .is_err());
    }

    #[test]
    fn test_markup_passes_through_unless_escaping() {
        let items = json!(["<script>alert(1)</script>"]);

        let raw = ReportFormatter::new()
            .shape(ReportKind::Risk, &query(Stream::All), &items)
            .unwrap();
        assert!(raw.contains("<script>alert(1)</script>"));

        let escaped = ReportFormatter::with_config(FormatterConfig { escape_html: true })
            .shape(ReportKind::Risk, &query(Stream::All), &items)
            .unwrap();
        assert!(escaped.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!escaped.contains("<script>"));
    }

    #[test]
    fn test_display_value() {
        assert_eq!(html::display_value(&json!("text")), "text");
        assert_eq!(html::display_value(&json!(12)), "12");
        assert_eq!(html::display_value(&json!(12.0)), "12");
        assert_eq!(html::display_value(&json!(33.33)), "33.33");
        assert_eq!(html::display_value(&json!(null)), "null");
        assert_eq!(html::display_value(&json!(true)), "true");
    }

    #[test]
    fn test_display_value_nested_and_large() {
        assert_eq!(html::display_value(&json!(["a", "b"])), "a,b");
        assert_eq!(html::display_value(&json!([1, [2, 3], null])), "1,2,3,");
        assert_eq!(html::display_value(&json!({"k": "v"})), "[object Object]");
        assert_eq!(html::display_value(&json!(1e16)), "10000000000000000");
        assert_eq!(html::display_value(&json!(-0.0)), "0");
        assert_eq!(html::display_value(&json!(0.5)), "0.5");
    }

    #[test]
    fn test_nested_values_in_lists() {
        let html = ReportFormatter::new()
            .shape(
                ReportKind::Risk,
                &query(Stream::All),
                &json!([["Epic A", "Epic B"], {"epic": "C"}]),
            )
            .unwrap();

        assert!(html.contains(r#"<li style="margin-bottom: 10px;">Epic A,Epic B</li>"#));
        assert!(html.contains(r#"<li style="margin-bottom: 10px;">[object Object]</li>"#));
    }

    #[test]
    fn test_curl_command_escapes_quotes() {
        let cmd = shell::format_curl_command(
            "POST",
            "http://127.0.0.1:8000/risk",
            &[("Content-Type".to_string(), "application/json".to_string())],
            Some(r#"{"selected_stream":"O'Neil"}"#),
        );
        assert!(cmd.starts_with("curl -X POST 'http://127.0.0.1:8000/risk'"));
        assert!(cmd.contains("-H 'Content-Type: application/json'"));
        assert!(cmd.contains("O'\"'\"'Neil"));
    }
}

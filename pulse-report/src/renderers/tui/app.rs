use crate::types::ReportKind;
use std::path::PathBuf;
use std::time::{Duration, Instant};

const FEEDBACK_TTL: Duration = Duration::from_secs(3);

/// Focusable elements of the controls pane, in Tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FromDate,
    ToDate,
    Stream,
    Action(ReportKind),
}

impl Field {
    pub const ORDER: [Field; 7] = [
        Field::FromDate,
        Field::ToDate,
        Field::Stream,
        Field::Action(ReportKind::Updates),
        Field::Action(ReportKind::Risk),
        Field::Action(ReportKind::Metrics),
        Field::Action(ReportKind::Holidays),
    ];

    pub fn next(self) -> Self {
        let idx = self.position();
        Self::ORDER[(idx + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> Self {
        let idx = self.position();
        Self::ORDER[(idx + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }
}

/// UI feedback for user actions
#[derive(Debug, Clone)]
pub struct ActionFeedback {
    pub message: String,
    pub feedback_type: FeedbackType,
    pub timestamp: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackType {
    Success,
    Warning,
    Error,
}

/// Terminal-only state; the dashboard state itself lives in the session
pub struct TuiApp {
    pub focus: Field,
    pub output_scroll: u16,
    pub action_feedback: Option<ActionFeedback>,
    /// Where Ctrl-S writes the page snapshot
    pub snapshot_path: PathBuf,
}

impl TuiApp {
    pub fn new(snapshot_path: PathBuf) -> Self {
        Self {
            focus: Field::FromDate,
            output_scroll: 0,
            action_feedback: None,
            snapshot_path,
        }
    }

    pub fn show_feedback<S: Into<String>>(&mut self, message: S, feedback_type: FeedbackType) {
        self.action_feedback = Some(ActionFeedback {
            message: message.into(),
            feedback_type,
            timestamp: Instant::now(),
        });
    }

    pub fn clear_old_feedback(&mut self) {
        if self
            .action_feedback
            .as_ref()
            .is_some_and(|f| f.timestamp.elapsed() > FEEDBACK_TTL)
        {
            self.action_feedback = None;
        }
    }
}

//! Presentation of the dashboard state
//!
//! The page renderer produces a standalone HTML snapshot of the dashboard; the
//! terminal dashboard (feature `tui`) drives the same state interactively.

use crate::dashboard::DashboardState;

/// Render a dashboard state into a string in one specific format
pub trait DashboardRenderer {
    fn render(&self, state: &DashboardState) -> String;
}

pub mod page;
#[cfg(feature = "tui")]
pub mod tui;

pub use page::PageRenderer;

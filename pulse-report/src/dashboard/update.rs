use super::msg::{Msg, Settlement};
use super::state::DashboardState;
use crate::error::GENERIC_FAILURE_MESSAGE;
use crate::types::{Query, ReportKind};

/// Side effects produced by the reducer. The caller executes them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Effect {
    #[default]
    None,
    Fetch(FetchRequest),
}

/// A report request to start, carrying the inputs captured at click time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub request_id: u64,
    pub kind: ReportKind,
    pub query: Query,
}

pub fn update(state: &mut DashboardState, msg: Msg) -> Effect {
    match msg {
        Msg::SetFromDate(date) => {
            state.from_date = date;
            Effect::None
        }
        Msg::SetToDate(date) => {
            state.to_date = date;
            Effect::None
        }
        Msg::SelectStream(stream) => {
            state.selected_stream = stream;
            Effect::None
        }
        Msg::Generate(kind) => handle_generate(state, kind),
        Msg::Settled(settlement) => {
            handle_settled(state, settlement);
            Effect::None
        }
    }
}

fn handle_generate(state: &mut DashboardState, kind: ReportKind) -> Effect {
    if !state.is_enabled(kind) {
        tracing::debug!(%kind, "ignoring request while another report is loading");
        return Effect::None;
    }

    state.header_text = kind.header_text().to_string();
    state.is_loading = true;

    let request_id = state.allocate_request_id();
    tracing::debug!(%kind, request_id, "starting report request");

    Effect::Fetch(FetchRequest {
        request_id,
        kind,
        query: state.query(),
    })
}

fn handle_settled(state: &mut DashboardState, settlement: Settlement) {
    match settlement.outcome {
        Ok(html) => {
            tracing::debug!(kind = %settlement.kind, request_id = settlement.request_id, "report settled");
            state.output_html = Some(html);
        }
        Err(error) => {
            tracing::warn!(
                kind = %settlement.kind,
                request_id = settlement.request_id,
                %error,
                "report request failed"
            );
            state.output_html = Some(GENERIC_FAILURE_MESSAGE.to_string());
        }
    }
    state.is_loading = false;
}

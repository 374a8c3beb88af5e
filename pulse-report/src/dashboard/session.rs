use super::exec::spawn_fetch;
use super::msg::{Msg, Settlement};
use super::state::DashboardState;
use super::update::{update, Effect};
use crate::client::ReportClient;
use crate::error::{ReportError, Result};
use crate::traits::ReportTransport;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Dashboard state wired to a report client and a settlement channel
pub struct DashboardSession<T: ReportTransport> {
    state: DashboardState,
    client: ReportClient<T>,
    handle: Handle,
    tx: UnboundedSender<Settlement>,
    rx: UnboundedReceiver<Settlement>,
    in_flight: usize,
}

impl<T: ReportTransport> DashboardSession<T> {
    pub fn new(client: ReportClient<T>, handle: Handle) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            state: DashboardState::new(),
            client,
            handle,
            tx,
            rx,
            in_flight: 0,
        }
    }

    /// Session bound to the runtime of the calling task
    pub fn current(client: ReportClient<T>) -> Result<Self> {
        let handle = Handle::try_current()
            .map_err(|e| ReportError::general(format!("No tokio runtime available: {}", e)))?;
        Ok(Self::new(client, handle))
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn client(&self) -> &ReportClient<T> {
        &self.client
    }

    /// Requests started but not yet applied
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Apply a message and start its fetch, if any. Returns the request id
    /// of the started fetch.
    pub fn dispatch(&mut self, msg: Msg) -> Option<u64> {
        match update(&mut self.state, msg) {
            Effect::None => None,
            Effect::Fetch(request) => {
                let request_id = request.request_id;
                self.in_flight += 1;
                spawn_fetch(&self.handle, self.client.clone(), request, self.tx.clone());
                Some(request_id)
            }
        }
    }

    /// Wait for the next request to complete and apply it.
    /// Returns `None` when nothing is in flight.
    pub async fn settle_next(&mut self) -> Option<Settlement> {
        if self.in_flight == 0 {
            return None;
        }
        let settlement = self.rx.recv().await?;
        Some(self.apply(settlement))
    }

    /// Apply every settlement still outstanding, in completion order
    pub async fn settle_all(&mut self) -> Vec<Settlement> {
        let mut settled = Vec::new();
        while let Some(settlement) = self.settle_next().await {
            settled.push(settlement);
        }
        settled
    }

    /// Apply settlements that have already arrived without waiting
    pub fn try_settle(&mut self) -> Vec<Settlement> {
        let mut settled = Vec::new();
        while self.in_flight > 0 {
            match self.rx.try_recv() {
                Ok(settlement) => settled.push(self.apply(settlement)),
                Err(_) => break,
            }
        }
        settled
    }

    fn apply(&mut self, settlement: Settlement) -> Settlement {
        self.in_flight = self.in_flight.saturating_sub(1);
        update(&mut self.state, Msg::Settled(settlement.clone()));
        settlement
    }
}

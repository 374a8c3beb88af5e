use super::msg::Settlement;
use super::update::FetchRequest;
use crate::client::ReportClient;
use crate::traits::ReportTransport;
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// Run a fetch on the runtime and report its settlement through `tx`.
///
/// The task owns its own copy of the query, so later form edits never leak
/// into a request that is already in flight.
pub fn spawn_fetch<T: ReportTransport>(
    handle: &Handle,
    client: ReportClient<T>,
    request: FetchRequest,
    tx: UnboundedSender<Settlement>,
) -> JoinHandle<()> {
    handle.spawn(async move {
        let FetchRequest {
            request_id,
            kind,
            query,
        } = request;

        let outcome = client
            .generate(kind, &query)
            .await
            .map_err(|e| e.to_string());

        let settlement = Settlement {
            request_id,
            kind,
            outcome,
        };

        if tx.send(settlement).is_err() {
            tracing::debug!(%kind, request_id, "dashboard closed before report settled");
        }
    })
}

//! Concurrent batch probing of all endpoints.

use futures_util::future::join_all;
use serde_json::Value;

use crate::display::{DisplayBoard, DisplayTarget, Notifier};
use crate::probe::client::EndpointClient;
use crate::probe::endpoints::Endpoint;
use crate::probe::outcome::ProbeError;

/// Outcome of one endpoint within a batch.
#[derive(Debug)]
pub struct EndpointResult {
    pub endpoint: Endpoint,
    pub outcome: Result<Value, ProbeError>,
}

impl EndpointResult {
    pub fn succeeded(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Per-endpoint outcomes of one batch run.
///
/// The aggregate pass/fail flag is derived from the detailed results, never
/// stored separately, so the two cannot disagree.
#[derive(Debug)]
pub struct BatchReport {
    pub results: Vec<EndpointResult>,
}

impl BatchReport {
    pub fn all_succeeded(&self) -> bool {
        self.results.iter().all(EndpointResult::succeeded)
    }

    /// The endpoints that failed, in render order.
    pub fn failures(&self) -> impl Iterator<Item = &EndpointResult> {
        self.results.iter().filter(|r| !r.succeeded())
    }
}

/// Probe one endpoint, driving its display target through
/// loading → success/error around the pure client call.
pub async fn probe(
    client: &EndpointClient,
    endpoint: Endpoint,
    target: &dyn DisplayTarget,
) -> EndpointResult {
    target.set_loading();

    let outcome = client.call(endpoint).await;
    match &outcome {
        Ok(body) => target.set_success(body),
        Err(error) => {
            tracing::error!(endpoint = %endpoint, error = %error, "probe failed");
            target.set_error(&error.detail());
        }
    }

    EndpointResult { endpoint, outcome }
}

/// Probe every endpoint concurrently and collect per-endpoint results.
///
/// The four probes are issued without awaiting each other and joined at the
/// end; completion order is not observable in the report, which always lists
/// endpoints in [`Endpoint::ALL`] order. Each probe renders into its own
/// target as soon as it settles, independent of the others.
pub async fn run_batch(client: &EndpointClient, board: &DisplayBoard) -> BatchReport {
    let probes = Endpoint::ALL.map(|endpoint| probe(client, endpoint, board.target(endpoint)));
    let results = join_all(probes).await;

    let report = BatchReport { results };
    tracing::info!(
        succeeded = report.results.iter().filter(|r| r.succeeded()).count(),
        failed = report.failures().count(),
        "batch completed"
    );
    report
}

/// Announce a batch outcome: one success notification when everything
/// passed, otherwise one failure notification naming the failed endpoints.
pub fn announce(report: &BatchReport, notifier: &dyn Notifier) {
    if report.all_succeeded() {
        notifier.success("all endpoints responded successfully");
    } else {
        let failed: Vec<&str> = report.failures().map(|r| r.endpoint.name()).collect();
        notifier.failure(
            "batch probe failed",
            &format!("endpoints failed: {}", failed.join(", ")),
        );
    }
}

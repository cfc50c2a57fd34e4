use crate::application::session::DigestSession;
use crate::digest::domain::{AggregationState, ComponentCatalog, ReleaseSummary, SelectionState};
use crate::digest::services::{RequestBuilder, ResponseNormalizer};
use crate::ports::outbound::{ProgressReporter, SummaryTransport};
use crate::shared::{DigestError, Result};
use indicatif::ProgressBar;
use std::time::Duration;

/// FetchSummariesUseCase - one end-to-end aggregation run.
///
/// Orchestrates a single fetch: builds the request payload from the
/// selection, performs exactly one round trip through the injected
/// transport, classifies the outcome, normalizes on success, and publishes
/// the resolved state through the session. Transport failures become a
/// `Ready` state holding one synthetic Error entry, so consumers never
/// see a partially committed result.
///
/// # Type Parameters
/// * `T` - SummaryTransport implementation
/// * `PR` - ProgressReporter implementation
pub struct FetchSummariesUseCase<T: SummaryTransport, PR: ProgressReporter> {
    transport: T,
    progress_reporter: PR,
}

impl<T: SummaryTransport, PR: ProgressReporter> FetchSummariesUseCase<T, PR> {
    pub fn new(transport: T, progress_reporter: PR) -> Self {
        Self {
            transport,
            progress_reporter,
        }
    }

    /// Executes one aggregation run against the session.
    ///
    /// # Errors
    /// Returns `EmptySelection` without touching the session or the
    /// transport when nothing is selected. All other failures are folded
    /// into the published state rather than propagated.
    pub async fn execute(
        &self,
        catalog: &ComponentCatalog,
        selection: &SelectionState,
        session: &DigestSession,
    ) -> Result<AggregationState> {
        let payload = RequestBuilder::build(catalog, selection);
        if payload.is_empty() {
            return Err(DigestError::EmptySelection {
                available: catalog.available_ids(),
            }
            .into());
        }

        let ticket = session.begin();
        self.progress_reporter.report(&format!(
            "📡 Requesting summaries for {} component(s)...",
            payload.len()
        ));

        let spinner = ProgressBar::new_spinner();
        spinner.set_message("Waiting for the summarization service...");
        spinner.enable_steady_tick(Duration::from_millis(80));

        let summaries = match self.transport.fetch_summaries(&payload).await {
            Ok(raw) => ResponseNormalizer::normalize(&raw, catalog),
            Err(e) => vec![ReleaseSummary::error(e.to_string())],
        };

        spinner.finish_and_clear();

        if session.commit(ticket, summaries) {
            self.progress_reporter.report_completion("Digest ready");
        } else {
            // A newer run owns the session; this result is discarded.
            self.progress_reporter
                .report("Run superseded by a newer request; result discarded");
        }

        Ok(session.snapshot())
    }
}

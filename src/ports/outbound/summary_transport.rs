use crate::digest::domain::RequestPayload;
use crate::shared::Result;
use async_trait::async_trait;

/// SummaryTransport port for the aggregation round trip.
///
/// Abstracts the summarization service: one payload in, one raw response
/// body out. The body is returned as unparsed text so the normalizer owns
/// all shape decisions, including non-JSON responses. Implementations must
/// perform exactly one attempt per call — retry policy is deliberately not
/// part of this contract.
///
/// # Errors
/// Returns an error only for transport-level failures (connection refused,
/// timeout, unreadable body). A non-success HTTP status with a readable
/// body is not an error here; the body flows to the normalizer, which
/// understands backend-reported error objects.
#[async_trait]
pub trait SummaryTransport: Send + Sync {
    async fn fetch_summaries(&self, payload: &RequestPayload) -> Result<String>;
}

use crate::digest::domain::ReleaseSummary;
use crate::shared::Result;
use async_trait::async_trait;

/// A rendered document returned by the backend-assisted export endpoint.
#[derive(Debug, Clone)]
pub struct ExportedDocument {
    /// Filename hint carried in the response (Content-Disposition), when
    /// the backend provided one.
    pub filename: Option<String>,
    pub bytes: Vec<u8>,
}

/// ExportTransport port for backend-assisted document rendering.
///
/// The summaries posted here must already have passed the export
/// preconditions; the transport does not re-validate them.
#[async_trait]
pub trait ExportTransport: Send + Sync {
    /// Posts the summaries and returns the rendered document payload.
    ///
    /// # Errors
    /// Returns an error on transport failure or when the backend rejects
    /// the request with an error object.
    async fn export(&self, summaries: &[ReleaseSummary]) -> Result<ExportedDocument>;
}

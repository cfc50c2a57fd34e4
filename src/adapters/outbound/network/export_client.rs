use crate::adapters::outbound::network::summary_client::validate_endpoint;
use crate::digest::domain::ReleaseSummary;
use crate::ports::outbound::{ExportTransport, ExportedDocument};
use crate::shared::{DigestError, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// Error object the export endpoint returns on non-success status.
#[derive(Debug, Deserialize)]
struct ExportErrorBody {
    error: String,
}

/// HTTP adapter for the backend-assisted export endpoint.
///
/// Posts `{"releaseNews": [...]}` and expects a binary document payload
/// with a filename hint in the Content-Disposition header. A non-success
/// status carries a JSON error object instead, which is surfaced as an
/// `ExportRejected` error.
pub struct HttpExportClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpExportClient {
    const TIMEOUT_SECONDS: u64 = 60;

    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let endpoint = endpoint.into();
        validate_endpoint(&endpoint)?;

        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("release-digest/{}", version);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl ExportTransport for HttpExportClient {
    async fn export(&self, summaries: &[ReleaseSummary]) -> Result<ExportedDocument> {
        let body = serde_json::json!({ "releaseNews": summaries });

        let response = self.client.post(&self.endpoint).json(&body).send().await?;
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ExportErrorBody>(&text)
                .map(|parsed| parsed.error)
                .unwrap_or_else(|_| format!("export endpoint returned status {}", status));
            return Err(DigestError::ExportRejected { message }.into());
        }

        let filename = response
            .headers()
            .get(reqwest::header::CONTENT_DISPOSITION)
            .and_then(|value| value.to_str().ok())
            .and_then(parse_content_disposition_filename);

        let bytes = response.bytes().await?.to_vec();

        Ok(ExportedDocument { filename, bytes })
    }
}

/// Extracts the filename parameter from a Content-Disposition header value,
/// e.g. `attachment; filename=Dynatrace_Release_Notes_20250101.pdf`.
fn parse_content_disposition_filename(header: &str) -> Option<String> {
    header.split(';').find_map(|part| {
        let trimmed = part.trim();
        let value = trimmed.strip_prefix("filename=")?;
        let name = value.trim_matches('"').trim();
        if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        }
    })
}

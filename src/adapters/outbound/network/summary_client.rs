use crate::digest::domain::RequestPayload;
use crate::ports::outbound::SummaryTransport;
use crate::shared::{DigestError, Result};
use async_trait::async_trait;
use std::time::Duration;

/// HTTP adapter for the summarization service.
///
/// Posts `{"selectedItems": [...]}` to the digest endpoint and hands the
/// response body back as raw text. Status codes are intentionally not
/// turned into errors here: the backend reports failures as a JSON
/// `{"error": ...}` body, which the normalizer understands, and anything
/// else surfaces through the normalizer's unexpected-response handling.
///
/// One request per call, no retry; the timeout keeps a stuck backend from
/// hanging the session.
#[derive(Debug)]
pub struct HttpSummaryClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSummaryClient {
    const TIMEOUT_SECONDS: u64 = 30;

    /// Creates a new client for the given summarize endpoint.
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
impl SummaryTransport for HttpSummaryClient {
    async fn fetch_summaries(&self, payload: &RequestPayload) -> Result<String> {
        let body = serde_json::json!({ "selectedItems": payload });

        let response = self.client.post(&self.endpoint).json(&body).send().await?;
        let text = response.text().await?;

        Ok(text)
    }
}

/// Rejects endpoints that are not absolute http(s) URLs before a client is
/// built around them.
pub(crate) fn validate_endpoint(endpoint: &str) -> Result<()> {
    if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
        return Err(DigestError::InvalidEndpoint {
            url: endpoint.to_string(),
            details: "missing http:// or https:// scheme".to_string(),
        }
        .into());
    }
    Ok(())
}

use async_trait::async_trait;
use release_digest::prelude::{RequestPayload, Result, SummaryTransport};
use std::sync::Arc;
use tokio::sync::Notify;

/// Transport that immediately returns a scripted body or failure.
pub struct ScriptedTransport {
    response: std::result::Result<String, String>,
}

impl ScriptedTransport {
    pub fn ok(body: &str) -> Self {
        Self {
            response: Ok(body.to_string()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            response: Err(message.to_string()),
        }
    }
}

#[async_trait]
impl SummaryTransport for ScriptedTransport {
    async fn fetch_summaries(&self, _payload: &RequestPayload) -> Result<String> {
        match &self.response {
            Ok(body) => Ok(body.clone()),
            Err(message) => Err(anyhow::anyhow!("{}", message)),
        }
    }
}

/// Transport that blocks until released, for exercising supersession.
pub struct GatedTransport {
    body: String,
    gate: Arc<Notify>,
}

impl GatedTransport {
    pub fn new(body: &str, gate: Arc<Notify>) -> Self {
        Self {
            body: body.to_string(),
            gate,
        }
    }
}

#[async_trait]
impl SummaryTransport for GatedTransport {
    async fn fetch_summaries(&self, _payload: &RequestPayload) -> Result<String> {
        self.gate.notified().await;
        Ok(self.body.clone())
    }
}

use crate::models::HealthSnapshot;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub const FALLBACK_REPLY: &str = "Sorry, I encountered an error. Please try again.";

#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("assistant request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("assistant returned HTTP {code}: {body}")]
    Status { code: u16, body: String },
    #[error("assistant reply could not be decoded: {0}")]
    Decode(#[source] serde_json::Error),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AssistantRequest<'a> {
    message: &'a str,
    health_context: &'a HealthSnapshot,
}

#[derive(Debug, Deserialize)]
struct AssistantReply {
    message: String,
}

/// Forwards chat messages to the remote assistant endpoint.
#[derive(Debug, Clone)]
pub struct AssistantClient {
    http: reqwest::Client,
    endpoint: String,
}

impl AssistantClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn ask(
        &self,
        message: &str,
        snapshot: &HealthSnapshot,
    ) -> Result<String, AssistantError> {
        let response = self
            .http
            .post(self.endpoint.as_str())
            .json(&AssistantRequest {
                message,
                health_context: snapshot,
            })
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        if !status.is_success() {
            return Err(AssistantError::Status {
                code: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        let reply: AssistantReply = serde_json::from_slice(&body).map_err(AssistantError::Decode)?;
        debug!(chars = reply.message.len(), "assistant replied");
        Ok(reply.message)
    }

    /// Like [`ask`](Self::ask), but any failure becomes [`FALLBACK_REPLY`].
    pub async fn reply(&self, message: &str, snapshot: &HealthSnapshot) -> String {
        match self.ask(message, snapshot).await {
            Ok(reply) => reply,
            Err(err) => {
                warn!(endpoint = %self.endpoint, "assistant call failed: {err}");
                FALLBACK_REPLY.to_string()
            }
        }
    }
}

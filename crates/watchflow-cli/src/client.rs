use std::future::Future;

use reqwest::Client;
use thiserror::Error;

use watchflow_core::{ErrorBody, RankRequest, RankedItem, RankedList};

/// Client side of the ranking contract.
pub trait RankingApi: Send + Sync {
    fn rank(
        &self,
        username: &str,
    ) -> impl Future<Output = Result<Vec<RankedItem>, ClientError>> + Send;
}

#[derive(Debug, Error)]
pub enum ClientError {
    /// Server answered with an error body. Displayed verbatim.
    #[error("{0}")]
    Server(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Ranking server over HTTP.
#[derive(Debug, Clone)]
pub struct HttpRankingClient {
    endpoint: String,
    http: Client,
}

impl HttpRankingClient {
    pub fn new(server_url: &str) -> Self {
        Self {
            endpoint: format!("{}/api/anilist", server_url.trim_end_matches('/')),
            http: Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl RankingApi for HttpRankingClient {
    async fn rank(&self, username: &str) -> Result<Vec<RankedItem>, ClientError> {
        tracing::debug!(endpoint = %self.endpoint, username, "ranking request");

        let resp = self
            .http
            .post(&self.endpoint)
            .json(&RankRequest {
                username: Some(username.to_string()),
            })
            .send()
            .await?;

        let status = resp.status();
        let body = resp.bytes().await?;
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "ranking request failed");
            return Err(ClientError::Server(error_message(&body)));
        }

        serde_json::from_slice::<RankedList>(&body)
            .map(|list| list.items)
            .map_err(|e| ClientError::Parse(e.to_string()))
    }
}

/// The `error` field of an error body, or a generic fallback.
fn error_message(body: &[u8]) -> String {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .map(|b| b.error)
        .filter(|e| !e.is_empty())
        .unwrap_or_else(|| "Request failed".to_string())
}

use reqwest::Client;

use super::error::AniListError;
use super::types::{GraphQLResponse, MediaListCollectionResponse};
use crate::traits::{MediaListSource, WatchEntry};

pub const API_URL: &str = "https://graphql.anilist.co";

const MEDIA_LIST_QUERY: &str = r#"
query ($userName: String) {
    MediaListCollection(userName: $userName, type: ANIME, status_in: [CURRENT, PLANNING, COMPLETED]) {
        lists {
            name
            entries {
                status
                progress
                media {
                    id
                    title { romaji english native }
                    episodes
                    coverImage { large }
                    genres
                    averageScore
                    siteUrl
                }
            }
        }
    }
}
"#;

/// Unauthenticated AniList GraphQL client for public list queries.
#[derive(Debug, Clone)]
pub struct AniListClient {
    api_url: String,
    http: Client,
}

impl AniListClient {
    pub fn new() -> Self {
        Self::with_client(Client::new(), API_URL)
    }

    /// Build a client on a shared connection pool, pointed at `api_url`.
    pub fn with_client(http: Client, api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            http,
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    async fn graphql_request<T: serde::de::DeserializeOwned>(
        &self,
        operation: &str,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<T, AniListError> {
        tracing::debug!(operation, "AniList GraphQL request");

        let resp = self
            .http
            .post(&self.api_url)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .json(&request_body(query, variables))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let status_code = status.as_u16();
            let body = match resp.text().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::warn!(operation, error = %e, "failed to read AniList error body");
                    e.to_string()
                }
            };
            tracing::warn!(operation, status = status_code, "AniList API error");
            return Err(AniListError::Api {
                status: status_code,
                message: body,
            });
        }

        tracing::debug!(operation, status = %status, "AniList response received");
        resp.json::<T>()
            .await
            .map_err(|e| AniListError::Parse(e.to_string()))
    }
}

impl Default for AniListClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaListSource for AniListClient {
    type Error = AniListError;

    async fn fetch_media_lists(&self, user_name: &str) -> Result<Vec<WatchEntry>, AniListError> {
        let resp: GraphQLResponse<MediaListCollectionResponse> = self
            .graphql_request(
                "MediaListCollection",
                MEDIA_LIST_QUERY,
                serde_json::json!({ "userName": user_name }),
            )
            .await?;

        Ok(resp.into_watch_entries())
    }
}

fn request_body(query: &str, variables: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "query": query,
        "variables": variables,
    })
}

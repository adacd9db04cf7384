//! Wire types shared by the ranking server and its clients.

use serde::{Deserialize, Serialize};

/// Inbound body of a ranking request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RankRequest {
    #[serde(default)]
    pub username: Option<String>,
}

/// One ranked show. `None` fields serialize as `null` ("unknown").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedItem {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub cover: Option<String>,
    #[serde(default)]
    pub episodes_total: Option<u32>,
    pub progress: u32,
    #[serde(default)]
    pub remaining: Option<u32>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub score: Option<u32>,
    pub url: String,
}

/// Successful ranking response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedList {
    pub username: String,
    pub items: Vec<RankedItem>,
}

/// Error response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

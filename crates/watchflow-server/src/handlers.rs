use axum::{body::Bytes, extract::State, Json};

use watchflow_api::MediaListSource;
use watchflow_core::{RankError, RankRequest, RankedList};

use crate::error::ApiError;
use crate::state::AppState;

/// `POST /api/anilist`: rank a user's CURRENT entries.
///
/// The body is decoded by hand so a malformed payload maps to the same
/// JSON error shape as every other failure.
pub async fn rank<S>(
    State(state): State<AppState<S>>,
    body: Bytes,
) -> Result<Json<RankedList>, ApiError>
where
    S: MediaListSource + 'static,
    RankError: From<S::Error>,
{
    let req: RankRequest =
        serde_json::from_slice(&body).map_err(|e| RankError::Unexpected(e.to_string()))?;
    let username = req.username.unwrap_or_default();

    let list = state.ranker.rank(&username).await?;
    Ok(Json(list))
}

pub async fn health_check() -> &'static str {
    "OK"
}

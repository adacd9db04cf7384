use watchflow_api::MediaListSource;

use crate::error::RankError;
use crate::models::RankedList;
use crate::ranking;

/// The ranking service. Stateless apart from its upstream source.
#[derive(Debug)]
pub struct Ranker<S> {
    source: S,
}

impl<S> Ranker<S>
where
    S: MediaListSource,
    RankError: From<S::Error>,
{
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Fetch `username`'s lists and return the top finish-first entries.
    pub async fn rank(&self, username: &str) -> Result<RankedList, RankError> {
        if username.is_empty() {
            return Err(RankError::Validation);
        }

        let entries = self.source.fetch_media_lists(username).await.map_err(|e| {
            tracing::warn!(username, error = %e, "media list fetch failed");
            RankError::from(e)
        })?;

        let items = ranking::rank_entries(entries);
        tracing::info!(username, count = items.len(), "ranked watch-list");

        Ok(RankedList {
            username: username.to_string(),
            items,
        })
    }
}

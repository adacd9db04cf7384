//! Normalized watch-list types and the source trait.
//!
//! Upstream clients convert their raw responses into [`WatchEntry`] values at
//! the boundary, so the ranking code never sees loosely-typed JSON.

use std::future::Future;

/// A provider of a user's anime media lists.
pub trait MediaListSource: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetch every entry of `user_name`'s lists, flattened across groups.
    fn fetch_media_lists(
        &self,
        user_name: &str,
    ) -> impl Future<Output = Result<Vec<WatchEntry>, Self::Error>> + Send;
}

/// Watch-list status of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WatchStatus {
    Current,
    Planning,
    Completed,
    /// Any status the query did not ask for (paused, dropped, repeating).
    #[serde(other)]
    Other,
}

/// One entry of a user's list.
#[derive(Debug, Clone, PartialEq)]
pub struct WatchEntry {
    pub status: WatchStatus,
    pub progress: u32,
    pub media: Option<MediaRef>,
}

/// Title variants as returned by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaTitles {
    pub romaji: Option<String>,
    pub english: Option<String>,
    pub native: Option<String>,
}

impl MediaTitles {
    /// Returns the display title: english, then romaji, then native.
    ///
    /// Empty strings are skipped.
    pub fn preferred(&self) -> &str {
        [&self.english, &self.romaji, &self.native]
            .into_iter()
            .filter_map(|t| t.as_deref())
            .find(|t| !t.is_empty())
            .unwrap_or("Unknown")
    }
}

/// Media metadata attached to a list entry.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaRef {
    pub id: u64,
    pub titles: MediaTitles,
    /// Known episode count. `None` for ongoing or unannounced shows.
    pub episodes: Option<u32>,
    pub cover_url: Option<String>,
    pub genres: Vec<String>,
    /// Average score on a 0-100 scale.
    pub average_score: Option<u32>,
    pub page_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(romaji: Option<&str>, english: Option<&str>, native: Option<&str>) -> MediaTitles {
        MediaTitles {
            romaji: romaji.map(String::from),
            english: english.map(String::from),
            native: native.map(String::from),
        }
    }

    #[test]
    fn test_preferred_title_order() {
        let t = titles(
            Some("Sousou no Frieren"),
            Some("Frieren: Beyond Journey's End"),
            Some("葬送のフリーレン"),
        );
        assert_eq!(t.preferred(), "Frieren: Beyond Journey's End");

        let t = titles(Some("Sousou no Frieren"), None, Some("葬送のフリーレン"));
        assert_eq!(t.preferred(), "Sousou no Frieren");

        let t = titles(None, None, Some("葬送のフリーレン"));
        assert_eq!(t.preferred(), "葬送のフリーレン");
    }

    #[test]
    fn test_preferred_title_skips_empty() {
        let t = titles(Some("Romaji"), Some(""), None);
        assert_eq!(t.preferred(), "Romaji");
        assert_eq!(MediaTitles::default().preferred(), "Unknown");
    }

    #[test]
    fn test_status_deserialize() {
        let s: WatchStatus = serde_json::from_str(r#""CURRENT""#).unwrap();
        assert_eq!(s, WatchStatus::Current);
        let s: WatchStatus = serde_json::from_str(r#""PLANNING""#).unwrap();
        assert_eq!(s, WatchStatus::Planning);
        let s: WatchStatus = serde_json::from_str(r#""DROPPED""#).unwrap();
        assert_eq!(s, WatchStatus::Other);
    }
}

use serde::Deserialize;

use crate::traits::{MediaRef, MediaTitles, WatchEntry, WatchStatus};

// ── GraphQL response wrappers ────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GraphQLResponse<T> {
    pub data: Option<T>,
}

// ── Media list collection ────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct MediaListCollectionResponse {
    #[serde(rename = "MediaListCollection")]
    pub media_list_collection: Option<MediaListCollection>,
}

#[derive(Debug, Deserialize)]
pub struct MediaListCollection {
    pub lists: Option<Vec<MediaListGroup>>,
}

#[derive(Debug, Deserialize)]
pub struct MediaListGroup {
    pub entries: Option<Vec<MediaListEntry>>,
}

#[derive(Debug, Deserialize)]
pub struct MediaListEntry {
    pub status: Option<WatchStatus>,
    pub progress: Option<u32>,
    pub media: Option<AniListMedia>,
}

#[derive(Debug, Deserialize)]
pub struct AniListMedia {
    pub id: u64,
    pub title: Option<AniListTitle>,
    pub episodes: Option<u32>,
    #[serde(rename = "coverImage")]
    pub cover_image: Option<CoverImage>,
    pub genres: Option<Vec<String>>,
    #[serde(rename = "averageScore")]
    pub average_score: Option<u32>,
    #[serde(rename = "siteUrl")]
    pub site_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AniListTitle {
    pub romaji: Option<String>,
    pub english: Option<String>,
    pub native: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CoverImage {
    pub large: Option<String>,
}

// ── Conversions ──────────────────────────────────────────────────

impl GraphQLResponse<MediaListCollectionResponse> {
    /// Flatten every list group into a single sequence of entries.
    ///
    /// Missing `data`, collection, lists or entries all flatten to nothing.
    pub fn into_watch_entries(self) -> Vec<WatchEntry> {
        self.data
            .and_then(|d| d.media_list_collection)
            .and_then(|c| c.lists)
            .unwrap_or_default()
            .into_iter()
            .flat_map(|group| group.entries.unwrap_or_default())
            .map(MediaListEntry::into_watch_entry)
            .collect()
    }
}

impl MediaListEntry {
    pub fn into_watch_entry(self) -> WatchEntry {
        WatchEntry {
            status: self.status.unwrap_or(WatchStatus::Other),
            progress: self.progress.unwrap_or(0),
            media: self.media.map(AniListMedia::into_media_ref),
        }
    }
}

impl AniListMedia {
    pub fn into_media_ref(self) -> MediaRef {
        let titles = self
            .title
            .map(|t| MediaTitles {
                romaji: t.romaji,
                english: t.english,
                native: t.native,
            })
            .unwrap_or_default();

        MediaRef {
            id: self.id,
            titles,
            // AniList reports 0 for some unannounced lengths.
            episodes: self.episodes.filter(|&n| n > 0),
            cover_url: self.cover_image.and_then(|c| c.large),
            genres: self.genres.unwrap_or_default(),
            average_score: self.average_score,
            page_url: self.site_url.unwrap_or_default(),
        }
    }
}

//! Finish-first ordering of a watch-list.
//!
//! Shows closest to completion come first. Shows without a known episode
//! count (ongoing or unannounced) follow, most popular first.

use std::cmp::Ordering;

use watchflow_api::{MediaRef, WatchEntry, WatchStatus};

use crate::models::RankedItem;

/// Maximum number of items returned by a ranking.
pub const TOP_N: usize = 10;

/// Episodes left to reach the known total. Never negative.
pub fn remaining(episodes: Option<u32>, progress: u32) -> Option<u32> {
    episodes.map(|total| total.saturating_sub(progress))
}

/// A CURRENT entry with media, ready to sort.
#[derive(Debug, Clone)]
struct Candidate {
    progress: u32,
    remaining: Option<u32>,
    media: MediaRef,
}

impl Candidate {
    fn from_entry(entry: WatchEntry) -> Option<Self> {
        if entry.status != WatchStatus::Current {
            return None;
        }
        let media = entry.media?;
        Some(Self {
            progress: entry.progress,
            remaining: remaining(media.episodes, entry.progress),
            media,
        })
    }

    fn into_ranked_item(self) -> RankedItem {
        RankedItem {
            id: self.media.id,
            title: self.media.titles.preferred().to_string(),
            cover: self.media.cover_url,
            episodes_total: self.media.episodes,
            progress: self.progress,
            remaining: self.remaining,
            genres: self.media.genres,
            score: self.media.average_score,
            url: self.media.page_url,
        }
    }
}

/// Total order: known remaining ascending, then unknown remaining by score
/// descending. An unknown score sorts below a score of 0. Ties fall back to
/// media id.
fn finish_first(a: &Candidate, b: &Candidate) -> Ordering {
    let primary = match (a.remaining, b.remaining) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => b.media.average_score.cmp(&a.media.average_score),
    };
    primary.then_with(|| a.media.id.cmp(&b.media.id))
}

/// Filter, order and truncate a flattened watch-list.
pub fn rank_entries(entries: Vec<WatchEntry>) -> Vec<RankedItem> {
    let total = entries.len();
    let mut watching: Vec<Candidate> = entries
        .into_iter()
        .filter_map(Candidate::from_entry)
        .collect();
    tracing::debug!(total, watching = watching.len(), "filtered CURRENT entries");

    // Stable, so equal keys keep their flatten order.
    watching.sort_by(finish_first);

    watching
        .into_iter()
        .take(TOP_N)
        .map(Candidate::into_ranked_item)
        .collect()
}

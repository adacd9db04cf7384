//! Upstream watch-list access for Watchflow.
//!
//! The [`anilist`] module talks to the AniList GraphQL API; [`traits`] holds
//! the normalized entry types and the [`traits::MediaListSource`] seam the
//! ranking service depends on.

pub mod anilist;
pub mod traits;

pub use anilist::{AniListClient, AniListError};
pub use traits::{MediaListSource, MediaRef, MediaTitles, WatchEntry, WatchStatus};

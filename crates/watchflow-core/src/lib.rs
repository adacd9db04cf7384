//! Finish-first ranking of a user's AniList watch-list.

pub mod config;
pub mod error;
pub mod models;
pub mod ranking;
pub mod service;

pub use error::{ConfigError, RankError};
pub use models::{ErrorBody, RankRequest, RankedItem, RankedList};
pub use service::Ranker;

use watchflow_core::RankedItem;

use crate::client::RankingApi;

// ── State ─────────────────────────────────────────────────────────

/// What the screen is currently showing.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    #[default]
    Idle,
    Loading,
    Success(Vec<RankedItem>),
    Failure(String),
}

/// One user's interaction: the username field plus the view state.
#[derive(Debug, Default)]
pub struct Session {
    username: String,
    state: ViewState,
}

// ── Implementation ────────────────────────────────────────────────

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = username.into();
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ViewState::Loading)
    }

    /// Whether the action control is enabled.
    pub fn can_submit(&self) -> bool {
        !self.username.is_empty() && !self.is_loading()
    }

    /// Run one ranking request. Returns `false` without doing anything if
    /// the username is empty or a request is already in flight.
    ///
    /// `on_loading` is called once the session has entered `Loading`,
    /// before the request is awaited.
    pub async fn submit<A: RankingApi>(&mut self, api: &A, on_loading: impl FnOnce(&Self)) -> bool {
        let Some(username) = self.begin() else {
            return false;
        };
        on_loading(self);

        let outcome = api.rank(&username).await.map_err(|e| e.to_string());
        self.complete(outcome);
        true
    }

    /// Enter `Loading`, discarding any previous result or error.
    pub(crate) fn begin(&mut self) -> Option<String> {
        if !self.can_submit() {
            tracing::debug!(loading = self.is_loading(), "submit ignored");
            return None;
        }
        self.state = ViewState::Loading;
        Some(self.username.clone())
    }

    pub(crate) fn complete(&mut self, outcome: Result<Vec<RankedItem>, String>) {
        if !self.is_loading() {
            tracing::debug!("completion without pending request ignored");
            return;
        }
        self.state = match outcome {
            Ok(items) => ViewState::Success(items),
            Err(message) => ViewState::Failure(message),
        };
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::client::ClientError;

    struct FakeApi {
        outcome: fn() -> Result<Vec<RankedItem>, ClientError>,
        calls: AtomicUsize,
    }

    impl FakeApi {
        fn new(outcome: fn() -> Result<Vec<RankedItem>, ClientError>) -> Self {
            Self {
                outcome,
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl RankingApi for FakeApi {
        async fn rank(&self, _username: &str) -> Result<Vec<RankedItem>, ClientError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            (self.outcome)()
        }
    }

    fn item(id: u64) -> RankedItem {
        RankedItem {
            id,
            title: format!("Show {id}"),
            cover: None,
            episodes_total: Some(12),
            progress: 10,
            remaining: Some(2),
            genres: Vec::new(),
            score: None,
            url: format!("https://anilist.co/anime/{id}"),
        }
    }

    #[tokio::test]
    async fn test_empty_username_is_noop() {
        let api = FakeApi::new(|| Ok(Vec::new()));
        let mut session = Session::new();
        assert!(!session.can_submit());
        assert!(!session.submit(&api, |_| {}).await);
        assert_eq!(session.state(), &ViewState::Idle);
        assert_eq!(api.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_submit_success() {
        let api = FakeApi::new(|| Ok(vec![item(1), item(2)]));
        let mut session = Session::new();
        session.set_username("someone");

        let mut saw_loading = false;
        assert!(session.submit(&api, |s| saw_loading = s.is_loading()).await);
        assert!(saw_loading);
        assert_eq!(session.state(), &ViewState::Success(vec![item(1), item(2)]));
        assert!(session.can_submit());
    }

    #[tokio::test]
    async fn test_submit_failure_replaces_results() {
        let ok = FakeApi::new(|| Ok(vec![item(1)]));
        let failing = FakeApi::new(|| Err(ClientError::Server("AniList error".into())));
        let mut session = Session::new();
        session.set_username("someone");

        session.submit(&ok, |_| {}).await;
        session.submit(&failing, |_| {}).await;
        assert_eq!(session.state(), &ViewState::Failure("AniList error".into()));

        session.submit(&ok, |_| {}).await;
        assert_eq!(session.state(), &ViewState::Success(vec![item(1)]));
    }

    #[tokio::test]
    async fn test_no_overlapping_submit() {
        let api = FakeApi::new(|| Ok(Vec::new()));
        let mut session = Session::new();
        session.set_username("someone");

        assert_eq!(session.begin().as_deref(), Some("someone"));
        assert!(!session.can_submit());
        assert!(!session.submit(&api, |_| {}).await);
        assert_eq!(api.calls.load(Ordering::SeqCst), 0);
        assert!(session.is_loading());

        session.complete(Ok(Vec::new()));
        assert_eq!(session.state(), &ViewState::Success(Vec::new()));
    }

    #[test]
    fn test_stray_completion_ignored() {
        let mut session = Session::new();
        session.complete(Err("late".into()));
        assert_eq!(session.state(), &ViewState::Idle);
    }
}

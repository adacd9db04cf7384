use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use watchflow_api::MediaListSource;
use watchflow_core::RankError;

use crate::{handlers, state::AppState};

pub fn create_router<S>(state: AppState<S>) -> Router
where
    S: MediaListSource + 'static,
    RankError: From<S::Error>,
{
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/anilist", post(handlers::rank::<S>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

use std::sync::Arc;

use watchflow_core::Ranker;

/// Shared handler state. Holds no per-request data.
pub struct AppState<S> {
    pub ranker: Arc<Ranker<S>>,
}

impl<S> AppState<S> {
    pub fn new(ranker: Ranker<S>) -> Self {
        Self {
            ranker: Arc::new(ranker),
        }
    }
}

// Manual impl: `S` itself need not be `Clone`.
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            ranker: Arc::clone(&self.ranker),
        }
    }
}

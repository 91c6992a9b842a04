//! Shared application state.

use std::sync::Arc;

use crate::application::services::RedirectService;

/// State injected into every handler.
///
/// Cloned per request; all members are behind [`Arc`].
#[derive(Clone)]
pub struct AppState {
    pub redirect_service: Arc<RedirectService>,
}

impl AppState {
    pub fn new(redirect_service: Arc<RedirectService>) -> Self {
        Self { redirect_service }
    }
}

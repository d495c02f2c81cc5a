use std::sync::Arc;

use axum::extract::FromRef;

use crate::{
    adapters::http::cookies::CookiePolicy,
    infra::config::AppConfig,
    use_cases::{documents::DocumentUseCases, drafts::DraftUseCases, session::SessionUseCases},
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub session_use_cases: Arc<SessionUseCases>,
    pub document_use_cases: Arc<DocumentUseCases>,
    pub draft_use_cases: Arc<DraftUseCases>,
}

impl AppState {
    pub fn cookie_policy(&self) -> CookiePolicy {
        CookiePolicy::from_config(&self.config)
    }
}

impl FromRef<AppState> for Arc<SessionUseCases> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.session_use_cases.clone()
    }
}

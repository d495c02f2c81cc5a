pub mod documents;
pub mod drafts;
pub mod pages;
pub mod session;

use axum::Router;

use crate::adapters::http::app_state::AppState;

/// Routes under `/api`. The session guard skips this namespace.
pub fn router() -> Router<AppState> {
    Router::new()
        .nest("/session", session::router())
        .nest("/documents", documents::router())
        .nest("/drafts", drafts::router())
}

//! Page handlers. Rendering lives elsewhere; these exist so navigation has
//! something to land on behind the session guard.

use axum::{
    Extension, Json, Router,
    extract::State,
    http::Uri,
    response::IntoResponse,
    routing::get,
};
use serde::Serialize;

use crate::{
    adapters::http::app_state::AppState,
    domain::entities::session::{CurrentUser, SessionState},
};

#[derive(Serialize)]
struct DashboardView {
    path: String,
    expires_at: Option<i64>,
    user: Option<CurrentUser>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/login", get(login))
        .route("/register", get(register))
        .route("/dashboard", get(dashboard))
        .route("/dashboard/{*rest}", get(dashboard))
}

async fn home() -> &'static str {
    "Blog Creator: upload documents, generate drafts, refine them with AI."
}

async fn login() -> &'static str {
    "Sign in"
}

async fn register() -> &'static str {
    "Create an account"
}

/// The guard guarantees a `SessionState` for every `/dashboard` path.
async fn dashboard(
    State(app_state): State<AppState>,
    Extension(session): Extension<SessionState>,
    uri: Uri,
) -> impl IntoResponse {
    let user = app_state
        .session_use_cases
        .current_user(Some(session.access_token()))
        .await;

    Json(DashboardView {
        path: uri.path().to_owned(),
        expires_at: session.expires_at(),
        user,
    })
}

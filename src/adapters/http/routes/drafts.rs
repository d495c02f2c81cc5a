//! Blog-draft routes: list, read, generate, edit, publish and refine.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use axum_extra::extract::{CookieJar, Form};
use serde::{Deserialize, Serialize};

use crate::{
    adapters::http::{app_state::AppState, cookies::require_access_token},
    app_error::AppResult,
    domain::entities::content::{DraftUpdate, Record},
};

/// `documentIds` may repeat; one entry per selected document.
#[derive(Deserialize)]
struct GenerateForm {
    #[serde(default, rename = "documentIds", alias = "document_ids")]
    document_ids: Vec<String>,
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Deserialize)]
struct UpdateForm {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    status: Option<String>,
}

#[derive(Deserialize)]
struct RefineForm {
    #[serde(default)]
    feedback: String,
}

#[derive(Serialize)]
struct DraftList {
    drafts: Vec<Record>,
}

#[derive(Serialize)]
struct DraftView {
    draft: Record,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(generate))
        .route("/{id}", get(show).put(update))
        .route("/{id}/publish", post(publish))
        .route("/{id}/refine", post(refine))
}

/// GET /api/drafts
async fn list(
    State(app_state): State<AppState>,
    cookies: CookieJar,
) -> AppResult<impl IntoResponse> {
    let access_token = require_access_token(&cookies)?;
    let drafts = app_state.draft_use_cases.list(&access_token).await?;
    Ok(Json(DraftList { drafts }))
}

/// GET /api/drafts/{id}
async fn show(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    cookies: CookieJar,
) -> AppResult<impl IntoResponse> {
    let access_token = require_access_token(&cookies)?;
    let draft = app_state.draft_use_cases.get(&access_token, &id).await?;
    Ok(Json(DraftView { draft }))
}

/// POST /api/drafts
async fn generate(
    State(app_state): State<AppState>,
    cookies: CookieJar,
    Form(form): Form<GenerateForm>,
) -> AppResult<impl IntoResponse> {
    let access_token = require_access_token(&cookies)?;
    let draft = app_state
        .draft_use_cases
        .generate(
            &access_token,
            form.document_ids,
            &form.title,
            form.description.as_deref(),
        )
        .await?;
    Ok((StatusCode::CREATED, Json(DraftView { draft })))
}

/// PUT /api/drafts/{id}
/// A blank `status` leaves the status unchanged.
async fn update(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    cookies: CookieJar,
    Form(form): Form<UpdateForm>,
) -> AppResult<impl IntoResponse> {
    let access_token = require_access_token(&cookies)?;
    let update = DraftUpdate {
        title: form.title,
        content: form.content,
        status: form.status.filter(|status| !status.trim().is_empty()),
    };
    let draft = app_state
        .draft_use_cases
        .update(&access_token, &id, update)
        .await?;
    Ok(Json(DraftView { draft }))
}

/// POST /api/drafts/{id}/publish
async fn publish(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    cookies: CookieJar,
) -> AppResult<impl IntoResponse> {
    let access_token = require_access_token(&cookies)?;
    let draft = app_state.draft_use_cases.publish(&access_token, &id).await?;
    Ok(Json(DraftView { draft }))
}

/// POST /api/drafts/{id}/refine
async fn refine(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    cookies: CookieJar,
    Form(form): Form<RefineForm>,
) -> AppResult<impl IntoResponse> {
    let access_token = require_access_token(&cookies)?;
    let draft = app_state
        .draft_use_cases
        .refine(&access_token, &id, &form.feedback)
        .await?;
    Ok(Json(DraftView { draft }))
}

//! Document routes. Each forwards the `access_token` cookie to the remote API.

use axum::{
    Json, Router,
    extract::{
        DefaultBodyLimit, Multipart, Path, State,
        multipart::MultipartError,
    },
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_extra::extract::CookieJar;
use serde::Serialize;

use crate::{
    adapters::http::{app_state::AppState, cookies::require_access_token},
    app_error::{AppError, AppResult},
    domain::entities::content::{Record, Upload},
};

/// Uploads larger than this are refused before reaching the remote API.
const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

#[derive(Serialize)]
struct DocumentList {
    documents: Vec<Record>,
}

#[derive(Serialize)]
struct DocumentView {
    document: Record,
}

#[derive(Serialize)]
struct Deleted {
    success: bool,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(upload))
        .route("/{id}", get(show).delete(remove))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
}

/// GET /api/documents
async fn list(
    State(app_state): State<AppState>,
    cookies: CookieJar,
) -> AppResult<impl IntoResponse> {
    let access_token = require_access_token(&cookies)?;
    let documents = app_state.document_use_cases.list(&access_token).await?;
    Ok(Json(DocumentList { documents }))
}

/// GET /api/documents/{id}
async fn show(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    cookies: CookieJar,
) -> AppResult<impl IntoResponse> {
    let access_token = require_access_token(&cookies)?;
    let document = app_state.document_use_cases.get(&access_token, &id).await?;
    Ok(Json(DocumentView { document }))
}

/// POST /api/documents
/// Multipart body with a single `file` field.
async fn upload(
    State(app_state): State<AppState>,
    cookies: CookieJar,
    mut multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let access_token = require_access_token(&cookies)?;
    let upload = read_file_field(&mut multipart).await?;
    let document = app_state
        .document_use_cases
        .upload(&access_token, upload)
        .await?;
    Ok((StatusCode::CREATED, Json(DocumentView { document })))
}

/// DELETE /api/documents/{id}
async fn remove(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    cookies: CookieJar,
) -> AppResult<impl IntoResponse> {
    let access_token = require_access_token(&cookies)?;
    app_state
        .document_use_cases
        .delete(&access_token, &id)
        .await?;
    Ok(Json(Deleted { success: true }))
}

async fn read_file_field(multipart: &mut Multipart) -> AppResult<Upload> {
    while let Some(field) = multipart.next_field().await.map_err(bad_multipart)? {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await.map_err(bad_multipart)?;
        return Ok(Upload {
            file_name,
            content_type,
            bytes: bytes.to_vec(),
        });
    }
    Err(AppError::InvalidInput("No file provided".into()))
}

fn bad_multipart(err: MultipartError) -> AppError {
    AppError::InvalidInput(err.body_text())
}

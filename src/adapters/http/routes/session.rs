//! Session routes: login, register, logout, and current user.

use axum::{
    Form, Json, Router,
    extract::State,
    http::HeaderMap,
    response::{IntoResponse, Redirect},
    routing::{get, post},
};
use axum_extra::extract::CookieJar;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::{
    adapters::http::{
        app_state::AppState,
        cookies::{clear_session_cookies, read_cookie, set_session_cookies},
    },
    app_error::AppResult,
    domain::entities::{
        route::{LANDING_PATH, LOGIN_PATH},
        session::{ACCESS_COOKIE, CurrentUser, TokenPair, deserialize_secret},
    },
};

#[derive(Deserialize)]
struct LoginForm {
    email: String,
    #[serde(deserialize_with = "deserialize_secret")]
    password: SecretString,
}

#[derive(Deserialize)]
struct RegisterForm {
    email: String,
    #[serde(deserialize_with = "deserialize_secret")]
    password: SecretString,
    #[serde(default, alias = "fullName")]
    full_name: Option<String>,
}

#[derive(Serialize)]
struct CurrentUserResponse {
    user: Option<CurrentUser>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/register", post(register))
        .route("/logout", post(logout))
        .route("/me", get(me))
}

/// POST /api/session/login
async fn login(
    State(app_state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> AppResult<impl IntoResponse> {
    let pair = app_state
        .session_use_cases
        .login(&form.email, form.password)
        .await?;
    signed_in(&app_state, &pair)
}

/// POST /api/session/register
/// Creates the account on the remote API, then signs in with it.
async fn register(
    State(app_state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> AppResult<impl IntoResponse> {
    let pair = app_state
        .session_use_cases
        .register(&form.email, form.password, form.full_name.as_deref())
        .await?;
    signed_in(&app_state, &pair)
}

/// POST /api/session/logout
async fn logout(State(app_state): State<AppState>) -> AppResult<impl IntoResponse> {
    let mut headers = HeaderMap::new();
    clear_session_cookies(&mut headers, &app_state.cookie_policy())?;
    Ok((headers, Redirect::to(LOGIN_PATH)))
}

/// GET /api/session/me
/// Never fails: a missing cookie or a failed lookup both answer `{"user": null}`.
async fn me(State(app_state): State<AppState>, cookies: CookieJar) -> impl IntoResponse {
    let access_token = read_cookie(&cookies, ACCESS_COOKIE);
    let user = app_state
        .session_use_cases
        .current_user(access_token.as_deref())
        .await;
    Json(CurrentUserResponse { user })
}

fn signed_in(app_state: &AppState, pair: &TokenPair) -> AppResult<impl IntoResponse + use<>> {
    let mut headers = HeaderMap::new();
    set_session_cookies(&mut headers, pair, &app_state.cookie_policy())?;
    Ok((headers, Redirect::to(LANDING_PATH)))
}

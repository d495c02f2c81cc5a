use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderValue, header::COOKIE},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::{CookieJar, cookie::Cookie};
use secrecy::{ExposeSecret, SecretString};

use crate::{
    adapters::http::{
        app_state::AppState,
        cookies::{CookiePolicy, clear_session_cookies, read_cookie, set_session_cookies},
    },
    application::{
        jwt,
        use_cases::session::GuardOutcome,
    },
    domain::entities::{
        route::{LANDING_PATH, LOGIN_PATH},
        session::{ACCESS_COOKIE, CLIENT_COOKIE, REFRESH_COOKIE, TokenPair},
    },
};

/// Session guard: runs before every page navigation.
///
/// Allows, redirects, or refreshes the credential pair and replays the request
/// with the new cookies. Handlers behind it find a `SessionState` extension
/// whenever a usable access token was presented.
pub async fn session_guard_middleware(
    State(app_state): State<AppState>,
    cookies: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_owned();
    let session_use_cases = app_state.session_use_cases.clone();
    if !session_use_cases.routes().is_guarded(&path) {
        return next.run(request).await;
    }

    let access_token = read_cookie(&cookies, ACCESS_COOKIE);
    let refresh_token =
        read_cookie(&cookies, REFRESH_COOKIE).map(|value| SecretString::new(value.into()));

    let outcome = session_use_cases
        .guard(
            &path,
            access_token.as_deref(),
            refresh_token.as_ref(),
            jwt::now_unix(),
        )
        .await;

    let policy = app_state.cookie_policy();
    match outcome {
        GuardOutcome::Allow(session) => {
            if let Some(session) = session {
                request.extensions_mut().insert(session);
            }
            next.run(request).await
        }
        GuardOutcome::Refreshed { pair, session } => {
            let Some(cookie_header) = replay_cookie_header(cookies, &pair) else {
                tracing::error!("refreshed credentials are not a valid cookie header");
                return redirect_to_login(&policy);
            };
            request.headers_mut().insert(COOKIE, cookie_header);
            request.extensions_mut().insert(session);

            let mut response = next.run(request).await;
            if let Err(err) = set_session_cookies(response.headers_mut(), &pair, &policy) {
                tracing::error!(error = %err, "failed to set refreshed cookies");
                return redirect_to_login(&policy);
            }
            response
        }
        GuardOutcome::RedirectToLogin => redirect_to_login(&policy),
        GuardOutcome::RedirectToLanding => Redirect::to(LANDING_PATH).into_response(),
    }
}

/// Redirect to the login page with every credential cookie expired.
pub fn redirect_to_login(policy: &CookiePolicy) -> Response {
    let mut headers = HeaderMap::new();
    if let Err(err) = clear_session_cookies(&mut headers, policy) {
        tracing::error!(error = %err, "failed to clear session cookies");
    }
    (headers, Redirect::to(LOGIN_PATH)).into_response()
}

/// The request's cookies with the credential cookies swapped for `pair`.
fn replay_cookie_header(cookies: CookieJar, pair: &TokenPair) -> Option<HeaderValue> {
    let jar = cookies
        .add(Cookie::new(ACCESS_COOKIE, pair.access_token.clone()))
        .add(Cookie::new(CLIENT_COOKIE, pair.access_token.clone()))
        .add(Cookie::new(
            REFRESH_COOKIE,
            pair.refresh_token.expose_secret().to_owned(),
        ));

    let header = jar
        .iter()
        .map(|cookie| cookie.stripped().to_string())
        .collect::<Vec<_>>()
        .join("; ");
    HeaderValue::from_str(&header).ok()
}

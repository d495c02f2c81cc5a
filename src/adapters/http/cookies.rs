//! Credential cookie helpers shared by the session guard and session routes.

use axum::http::{HeaderMap, HeaderValue, header::SET_COOKIE};
use axum_extra::extract::{
    CookieJar,
    cookie::{Cookie, SameSite},
};
use secrecy::ExposeSecret;
use time::Duration;

use crate::{
    app_error::{AppError, AppResult},
    domain::entities::session::{ACCESS_COOKIE, CLIENT_COOKIE, REFRESH_COOKIE, TokenPair},
    infra::config::AppConfig,
};

/// Attributes applied to every credential cookie.
#[derive(Debug, Clone, Copy)]
pub struct CookiePolicy {
    pub secure: bool,
    pub access_max_age: Duration,
    pub refresh_max_age: Duration,
}

impl CookiePolicy {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            secure: config.production,
            access_max_age: config.access_cookie_max_age,
            refresh_max_age: config.refresh_cookie_max_age,
        }
    }

    fn build(
        &self,
        name: &'static str,
        value: String,
        http_only: bool,
        max_age: Duration,
    ) -> Cookie<'static> {
        Cookie::build((name, value))
            .http_only(http_only)
            .secure(self.secure)
            .same_site(SameSite::Lax)
            .path("/")
            .max_age(max_age)
            .build()
    }
}

/// Appends a cookie to the headers, handling parse errors gracefully
pub(crate) fn append_cookie(headers: &mut HeaderMap, cookie: Cookie<'_>) -> AppResult<()> {
    let value = HeaderValue::from_str(&cookie.to_string())
        .map_err(|_| AppError::Internal("Failed to build cookie header".into()))?;
    headers.append(SET_COOKIE, value);
    Ok(())
}

/// A cookie's value; empty values count as absent.
pub fn read_cookie(cookies: &CookieJar, name: &str) -> Option<String> {
    cookies
        .get(name)
        .map(|cookie| cookie.value().to_owned())
        .filter(|value| !value.is_empty())
}

/// The bearer credential forwarded to the remote API on the user's behalf.
pub fn require_access_token(cookies: &CookieJar) -> AppResult<String> {
    read_cookie(cookies, ACCESS_COOKIE).ok_or(AppError::InvalidCredentials)
}

/// Sets `access_token`, its script-readable `client_token` mirror, and
/// `refresh_token`.
pub fn set_session_cookies(
    headers: &mut HeaderMap,
    pair: &TokenPair,
    policy: &CookiePolicy,
) -> AppResult<()> {
    let access = policy.build(
        ACCESS_COOKIE,
        pair.access_token.clone(),
        true,
        policy.access_max_age,
    );
    let client = policy.build(
        CLIENT_COOKIE,
        pair.access_token.clone(),
        false,
        policy.access_max_age,
    );
    let refresh = policy.build(
        REFRESH_COOKIE,
        pair.refresh_token.expose_secret().to_owned(),
        true,
        policy.refresh_max_age,
    );

    append_cookie(headers, access)?;
    append_cookie(headers, client)?;
    append_cookie(headers, refresh)?;
    Ok(())
}

/// Expires all three credential cookies.
pub fn clear_session_cookies(headers: &mut HeaderMap, policy: &CookiePolicy) -> AppResult<()> {
    for (name, http_only) in [
        (ACCESS_COOKIE, true),
        (CLIENT_COOKIE, false),
        (REFRESH_COOKIE, true),
    ] {
        let cookie = policy.build(name, String::new(), http_only, Duration::seconds(0));
        append_cookie(headers, cookie)?;
    }
    Ok(())
}

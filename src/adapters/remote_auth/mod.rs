//! Client for the auth endpoints of the document/drafting API.

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::{
    app_error::{AppError, AppResult},
    application::use_cases::session::AuthGateway,
    domain::entities::session::{CurrentUser, TokenPair},
};

const REFRESH_PATH: &str = "/api/v1/auth/refresh";
const LOGIN_PATH: &str = "/api/v1/auth/login";
const REGISTER_PATH: &str = "/api/v1/auth/register";
const ME_PATH: &str = "/api/v1/auth/me";

#[derive(Clone)]
pub struct HttpAuthGateway {
    client: Client,
    base_url: String,
}

impl HttpAuthGateway {
    pub fn new(client: Client, base_url: &Url) -> Self {
        Self {
            client,
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[derive(Serialize)]
struct RefreshRequest<'a> {
    refresh_token: &'a str,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RegisterRequest<'a> {
    email: &'a str,
    password: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    full_name: Option<&'a str>,
}

fn transport(err: reqwest::Error) -> AppError {
    AppError::Upstream(err.to_string())
}

/// Non-2xx answers from the token endpoints are credential rejections.
async fn token_pair(resp: Response) -> AppResult<TokenPair> {
    if !resp.status().is_success() {
        tracing::debug!(status = %resp.status(), "auth API rejected credentials");
        return Err(AppError::InvalidCredentials);
    }
    resp.json::<TokenPair>().await.map_err(transport)
}

#[async_trait]
impl AuthGateway for HttpAuthGateway {
    async fn refresh(&self, refresh_token: &SecretString) -> AppResult<TokenPair> {
        let body = RefreshRequest {
            refresh_token: refresh_token.expose_secret(),
        };
        let resp = self
            .client
            .post(self.endpoint(REFRESH_PATH))
            .json(&body)
            .send()
            .await
            .map_err(transport)?;
        token_pair(resp).await
    }

    async fn login(&self, email: &str, password: &SecretString) -> AppResult<TokenPair> {
        let body = LoginRequest {
            email,
            password: password.expose_secret(),
        };
        let resp = self
            .client
            .post(self.endpoint(LOGIN_PATH))
            .json(&body)
            .send()
            .await
            .map_err(transport)?;
        token_pair(resp).await
    }

    async fn register(
        &self,
        email: &str,
        password: &SecretString,
        full_name: Option<&str>,
    ) -> AppResult<()> {
        let body = RegisterRequest {
            email,
            password: password.expose_secret(),
            full_name,
        };
        let resp = self
            .client
            .post(self.endpoint(REGISTER_PATH))
            .json(&body)
            .send()
            .await
            .map_err(transport)?;

        if resp.status().is_success() {
            return Ok(());
        }

        // Validation failures carry a list in `detail`; only plain strings are
        // shown to the user.
        let detail = resp
            .json::<Value>()
            .await
            .ok()
            .and_then(|body| body.get("detail").and_then(Value::as_str).map(str::to_string))
            .unwrap_or_else(|| "Registration failed".to_string());
        Err(AppError::RegistrationFailed(detail))
    }

    async fn current_user(&self, access_token: &str) -> AppResult<CurrentUser> {
        let resp = self
            .client
            .get(self.endpoint(ME_PATH))
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(transport)?;

        if !resp.status().is_success() {
            return Err(AppError::InvalidCredentials);
        }
        resp.json::<CurrentUser>().await.map_err(transport)
    }
}

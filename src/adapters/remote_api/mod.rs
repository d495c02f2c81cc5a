//! Client for the document and blog-draft endpoints of the remote API.
//!
//! Every request carries the browser's `access_token` cookie as a bearer
//! credential. The token is never refreshed here; an expired one comes back as
//! `InvalidCredentials` and the next page navigation runs the session guard.

mod documents;
mod drafts;

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde_json::Value;
use url::Url;

use crate::{
    app_error::{AppError, AppResult},
    domain::entities::content::Record,
};

#[derive(Clone)]
pub struct HttpContentGateway {
    client: Client,
    base_url: Url,
}

impl HttpContentGateway {
    pub fn new(client: Client, base_url: &Url) -> Self {
        Self {
            client,
            base_url: base_url.clone(),
        }
    }

    /// `segments` are appended percent-encoded to the base URL's path.
    fn endpoint(&self, segments: &[&str]) -> AppResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::Internal("API base URL cannot carry a path".into()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(
        &self,
        method: Method,
        segments: &[&str],
        access_token: &str,
    ) -> AppResult<RequestBuilder> {
        let url = self.endpoint(segments)?;
        Ok(self.client.request(method, url).bearer_auth(access_token))
    }

    /// Sends the request; `failure` is the message shown when the remote says no.
    async fn send(&self, request: RequestBuilder, failure: &str) -> AppResult<Response> {
        let resp = request.send().await.map_err(transport)?;
        check_status(resp, failure).await
    }

    async fn fetch(&self, request: RequestBuilder, failure: &str) -> AppResult<Record> {
        self.send(request, failure)
            .await?
            .json::<Record>()
            .await
            .map_err(transport)
    }
}

fn transport(err: reqwest::Error) -> AppError {
    AppError::Upstream(err.to_string())
}

async fn check_status(resp: Response, failure: &str) -> AppResult<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    tracing::warn!(%status, failure, "remote API refused request");

    match status {
        StatusCode::UNAUTHORIZED => Err(AppError::InvalidCredentials),
        StatusCode::NOT_FOUND => Err(AppError::NotFound(failure.to_string())),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            let detail = detail_message(resp).await;
            Err(AppError::InvalidInput(
                detail.unwrap_or_else(|| failure.to_string()),
            ))
        }
        _ => Err(AppError::RemoteRejected(failure.to_string())),
    }
}

/// The remote's `detail` when it is a plain string; validation lists are not
/// shown to the user.
async fn detail_message(resp: Response) -> Option<String> {
    let body = resp.json::<Value>().await.ok()?;
    body.get("detail")?.as_str().map(str::to_string)
}

/// Lists come back either bare or wrapped as `{"<key>": [...]}`.
fn records_in(body: Value, key: &str) -> Vec<Record> {
    match body {
        Value::Array(items) => items,
        Value::Object(mut fields) => match fields.remove(key) {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

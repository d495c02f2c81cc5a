use secrecy::SecretString;
use serde::{Deserialize, Deserializer, Serialize};

pub const ACCESS_COOKIE: &str = "access_token";
/// Script-readable mirror of the access token for client-side request signing.
pub const CLIENT_COOKIE: &str = "client_token";
pub const REFRESH_COOKIE: &str = "refresh_token";

/// Credential pair issued by the remote API on login or refresh.
#[derive(Debug, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    #[serde(deserialize_with = "deserialize_secret")]
    pub refresh_token: SecretString,
}

/// Deserializes a plain string straight into a `SecretString`.
pub fn deserialize_secret<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(|value| SecretString::new(value.into()))
}

/// The authenticated session as seen by a request handler.
///
/// Built by the session guard once per request and handed to handlers through
/// the request extensions. Handlers get a copy; nothing writes it back.
#[derive(Debug, Clone, Serialize)]
pub struct SessionState {
    #[serde(skip)]
    access_token: String,
    expires_at: Option<i64>,
}

impl SessionState {
    pub fn new(access_token: String, expires_at: Option<i64>) -> Self {
        Self {
            access_token,
            expires_at,
        }
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Unverified expiry hint, seconds since epoch.
    pub fn expires_at(&self) -> Option<i64> {
        self.expires_at
    }
}

/// User profile as returned by `GET /api/v1/auth/me`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

fn default_active() -> bool {
    true
}

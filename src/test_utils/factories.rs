//! Token factories.

use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde::Serialize;

use crate::application::jwt;

/// Signing key used for test tokens. The web tier never verifies signatures,
/// so any key works.
const TEST_SIGNING_KEY: &[u8] = b"docudraft-test-signing-key";

#[derive(Serialize)]
struct TestClaims<'a> {
    sub: &'a str,
    #[serde(rename = "type")]
    kind: &'a str,
    exp: i64,
}

/// Mint an HS256 access token expiring at `exp` (seconds since epoch).
pub fn issue_test_token(exp: i64) -> String {
    let claims = TestClaims {
        sub: "user-1",
        kind: "access",
        exp,
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_SIGNING_KEY),
    )
    .expect("test token should encode")
}

/// A token valid for the next hour of wall-clock time.
pub fn fresh_access_token() -> String {
    issue_test_token(jwt::now_unix() + 3600)
}

/// A token that expired a minute ago.
pub fn expired_access_token() -> String {
    issue_test_token(jwt::now_unix() - 60)
}

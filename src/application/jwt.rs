//! Unverified access-token expiry decoding.
//!
//! The web tier never holds the signing secret. Signatures are checked by the
//! remote API; here we only peek at `exp` to decide whether a refresh round-trip
//! is worth making. Nothing returned from this module may be used to authorize
//! a request.

use base64::{Engine, engine::general_purpose::STANDARD};
use serde_json::Value;
use time::OffsetDateTime;

/// Access tokens are refreshed this many seconds before they actually expire.
pub const REFRESH_SKEW_SECS: i64 = 30;

/// Returns the `exp` claim of a three-segment token, or `None` if it cannot be
/// read for any reason.
pub fn peek_expiry(token: &str) -> Option<i64> {
    let mut segments = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return None;
    };
    if payload.is_empty() {
        return None;
    }

    let decoded = decode_segment(payload)?;
    let claims: Value = serde_json::from_str(&decoded).ok()?;
    let exp = claims.get("exp")?;
    let exp = exp.as_i64().or_else(|| exp.as_f64().map(|f| f.floor() as i64))?;

    // A zero expiry carries no information.
    (exp != 0).then_some(exp)
}

/// Expired means `exp <= now + REFRESH_SKEW_SECS`. Unreadable tokens are expired.
pub fn is_expired_at(token: &str, now_secs: i64) -> bool {
    match peek_expiry(token) {
        Some(exp) => exp <= now_secs + REFRESH_SKEW_SECS,
        None => true,
    }
}

pub fn is_expired(token: &str) -> bool {
    is_expired_at(token, now_unix())
}

pub fn now_unix() -> i64 {
    OffsetDateTime::now_utc().unix_timestamp()
}

/// base64url -> standard alphabet, re-padded, then decoded as UTF-8.
fn decode_segment(segment: &str) -> Option<String> {
    let mut normalized: String = segment
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();
    let padding = (4 - normalized.len() % 4) % 4;
    normalized.extend(std::iter::repeat_n('=', padding));

    let bytes = STANDARD.decode(normalized).ok()?;
    String::from_utf8(bytes).ok()
}

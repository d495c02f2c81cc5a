use validator::ValidateEmail;

use crate::app_error::{AppError, AppResult};

/// Validates that the input looks like a valid email address
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    !email.is_empty() && email.validate_email()
}

/// The remote API enforces its own password policy; locally we only reject
/// empty submissions so the round-trip is not wasted.
pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Identifiers are interpolated into remote API paths, so only plain
/// slug/UUID characters are accepted.
pub fn is_resource_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= 128
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

pub fn require_resource_id(id: &str) -> AppResult<()> {
    if is_resource_id(id) {
        Ok(())
    } else {
        Err(AppError::InvalidInput("Invalid id".into()))
    }
}

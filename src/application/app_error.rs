use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Registration failed: {0}")]
    RegistrationFailed(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Remote API refused the request: {0}")]
    RemoteRejected(String),

    #[error("Upstream API error: {0}")]
    Upstream(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Clone, Copy, Debug)]
pub enum ErrorCode {
    InvalidCredentials,
    InvalidInput,
    RegistrationFailed,
    NotFound,
    RemoteRejected,
    UpstreamUnavailable,
    InternalError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidCredentials => "INVALID_CREDENTIALS",
            ErrorCode::InvalidInput => "INVALID_INPUT",
            ErrorCode::RegistrationFailed => "REGISTRATION_FAILED",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::RemoteRejected => "REMOTE_REJECTED",
            ErrorCode::UpstreamUnavailable => "UPSTREAM_UNAVAILABLE",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

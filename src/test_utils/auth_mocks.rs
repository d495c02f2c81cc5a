//! In-memory stand-in for the remote auth API.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use std::sync::Mutex;

use crate::{
    app_error::{AppError, AppResult},
    application::use_cases::session::AuthGateway,
    domain::entities::session::{CurrentUser, TokenPair},
};

/// Scripted answer for `refresh` and `login`.
#[derive(Debug, Clone)]
pub enum StubReply {
    Tokens { access: String, refresh: String },
    /// The remote answered with a non-2xx status.
    Reject,
    /// The remote could not be reached.
    Unreachable,
}

impl StubReply {
    fn to_result(&self) -> AppResult<TokenPair> {
        match self {
            StubReply::Tokens { access, refresh } => Ok(TokenPair {
                access_token: access.clone(),
                refresh_token: SecretString::new(refresh.clone().into()),
            }),
            StubReply::Reject => Err(AppError::InvalidCredentials),
            StubReply::Unreachable => Err(AppError::Upstream("connection refused".into())),
        }
    }
}

/// Records every call and answers from its script. Unscripted calls are
/// rejected.
pub struct StubAuthGateway {
    refresh_reply: Mutex<StubReply>,
    login_reply: Mutex<StubReply>,
    register_rejection: Mutex<Option<String>>,
    user: Mutex<Option<CurrentUser>>,
    refresh_calls: Mutex<Vec<String>>,
    login_calls: Mutex<Vec<String>>,
    register_calls: Mutex<Vec<(String, Option<String>)>>,
    user_calls: Mutex<Vec<String>>,
}

impl Default for StubAuthGateway {
    fn default() -> Self {
        Self {
            refresh_reply: Mutex::new(StubReply::Reject),
            login_reply: Mutex::new(StubReply::Reject),
            register_rejection: Mutex::new(None),
            user: Mutex::new(None),
            refresh_calls: Mutex::new(Vec::new()),
            login_calls: Mutex::new(Vec::new()),
            register_calls: Mutex::new(Vec::new()),
            user_calls: Mutex::new(Vec::new()),
        }
    }
}

impl StubAuthGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_refresh(self, reply: StubReply) -> Self {
        *self.refresh_reply.lock().unwrap() = reply;
        self
    }

    pub fn with_login(self, reply: StubReply) -> Self {
        *self.login_reply.lock().unwrap() = reply;
        self
    }

    pub fn with_register_rejection(self, detail: &str) -> Self {
        *self.register_rejection.lock().unwrap() = Some(detail.to_string());
        self
    }

    pub fn with_user(self, user: CurrentUser) -> Self {
        *self.user.lock().unwrap() = Some(user);
        self
    }

    /// Refresh tokens presented so far, in order.
    pub fn refresh_calls(&self) -> Vec<String> {
        self.refresh_calls.lock().unwrap().clone()
    }

    /// Emails presented to `login` so far.
    pub fn login_calls(&self) -> Vec<String> {
        self.login_calls.lock().unwrap().clone()
    }

    pub fn register_calls(&self) -> Vec<(String, Option<String>)> {
        self.register_calls.lock().unwrap().clone()
    }

    /// Access tokens presented to `current_user` so far.
    pub fn user_calls(&self) -> Vec<String> {
        self.user_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AuthGateway for StubAuthGateway {
    async fn refresh(&self, refresh_token: &SecretString) -> AppResult<TokenPair> {
        self.refresh_calls
            .lock()
            .unwrap()
            .push(refresh_token.expose_secret().to_string());
        self.refresh_reply.lock().unwrap().to_result()
    }

    async fn login(&self, email: &str, _password: &SecretString) -> AppResult<TokenPair> {
        self.login_calls.lock().unwrap().push(email.to_string());
        self.login_reply.lock().unwrap().to_result()
    }

    async fn register(
        &self,
        email: &str,
        _password: &SecretString,
        full_name: Option<&str>,
    ) -> AppResult<()> {
        self.register_calls
            .lock()
            .unwrap()
            .push((email.to_string(), full_name.map(str::to_string)));
        match self.register_rejection.lock().unwrap().clone() {
            Some(detail) => Err(AppError::RegistrationFailed(detail)),
            None => Ok(()),
        }
    }

    async fn current_user(&self, access_token: &str) -> AppResult<CurrentUser> {
        self.user_calls.lock().unwrap().push(access_token.to_string());
        self.user
            .lock()
            .unwrap()
            .clone()
            .ok_or(AppError::InvalidCredentials)
    }
}

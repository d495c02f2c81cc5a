use std::sync::Arc;

use async_trait::async_trait;
use secrecy::SecretString;
use tracing::{debug, instrument, warn};

use crate::{
    app_error::{AppError, AppResult},
    application::{jwt, validators},
    domain::entities::{
        route::RouteTable,
        session::{CurrentUser, SessionState, TokenPair},
    },
};

/// The remote API that owns credential issuance and verification.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Exchanges a refresh token for a new pair. Any non-2xx answer is
    /// `InvalidCredentials`; transport failures are `Upstream`.
    async fn refresh(&self, refresh_token: &SecretString) -> AppResult<TokenPair>;
    async fn login(&self, email: &str, password: &SecretString) -> AppResult<TokenPair>;
    async fn register(
        &self,
        email: &str,
        password: &SecretString,
        full_name: Option<&str>,
    ) -> AppResult<()>;
    async fn current_user(&self, access_token: &str) -> AppResult<CurrentUser>;
}

/// What the session guard decided for one request.
#[derive(Debug)]
pub enum GuardOutcome {
    /// Let the request through. Carries the session when a usable access token
    /// was presented.
    Allow(Option<SessionState>),
    /// A refresh succeeded: replay the request with these credentials and set
    /// them on the response.
    Refreshed {
        pair: TokenPair,
        session: SessionState,
    },
    /// Send to the login page and clear every credential cookie.
    RedirectToLogin,
    /// Already signed in; send to the landing page.
    RedirectToLanding,
}

#[derive(Clone)]
pub struct SessionUseCases {
    gateway: Arc<dyn AuthGateway>,
    routes: RouteTable,
}

impl SessionUseCases {
    pub fn new(gateway: Arc<dyn AuthGateway>, routes: RouteTable) -> Self {
        Self { gateway, routes }
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Runs the guard decision table for `path`. `now_secs` is the wall clock
    /// used for the expiry heuristic.
    #[instrument(skip(self, access_token, refresh_token))]
    pub async fn guard(
        &self,
        path: &str,
        access_token: Option<&str>,
        refresh_token: Option<&SecretString>,
        now_secs: i64,
    ) -> GuardOutcome {
        let usable_access = access_token.filter(|token| !jwt::is_expired_at(token, now_secs));

        if self.routes.is_protected(path) {
            if let Some(token) = usable_access {
                return GuardOutcome::Allow(Some(session_for(token)));
            }

            // Missing or expired access token from here on.
            let Some(refresh_token) = refresh_token else {
                debug!(
                    has_access = access_token.is_some(),
                    "no refresh token; redirecting to login"
                );
                return GuardOutcome::RedirectToLogin;
            };

            return self.try_refresh(refresh_token).await;
        }

        if self.routes.is_public(path) && usable_access.is_some() {
            debug!("already authenticated; redirecting to landing page");
            return GuardOutcome::RedirectToLanding;
        }

        GuardOutcome::Allow(usable_access.map(session_for))
    }

    async fn try_refresh(&self, refresh_token: &SecretString) -> GuardOutcome {
        match self.gateway.refresh(refresh_token).await {
            Ok(pair) => {
                debug!("session refreshed");
                let session = session_for(&pair.access_token);
                GuardOutcome::Refreshed { pair, session }
            }
            Err(err) => {
                warn!(error = %err, "session refresh failed; redirecting to login");
                GuardOutcome::RedirectToLogin
            }
        }
    }

    #[instrument(skip_all)]
    pub async fn login(&self, email: &str, password: SecretString) -> AppResult<TokenPair> {
        let email = email.trim();
        validate_credentials(email, &password)?;
        self.gateway.login(email, &password).await
    }

    /// Registers the account and then signs in with the same credentials.
    #[instrument(skip_all)]
    pub async fn register(
        &self,
        email: &str,
        password: SecretString,
        full_name: Option<&str>,
    ) -> AppResult<TokenPair> {
        let email = email.trim();
        validate_credentials(email, &password)?;
        let full_name = full_name.map(str::trim).filter(|name| !name.is_empty());

        self.gateway.register(email, &password, full_name).await?;
        self.gateway.login(email, &password).await
    }

    /// Looks up the signed-in user. Lookup failures read as "nobody".
    pub async fn current_user(&self, access_token: Option<&str>) -> Option<CurrentUser> {
        let token = access_token.filter(|token| !token.is_empty())?;
        match self.gateway.current_user(token).await {
            Ok(user) => Some(user),
            Err(err) => {
                debug!(error = %err, "current user lookup failed");
                None
            }
        }
    }
}

fn session_for(access_token: &str) -> SessionState {
    SessionState::new(access_token.to_owned(), jwt::peek_expiry(access_token))
}

fn validate_credentials(email: &str, password: &SecretString) -> AppResult<()> {
    use secrecy::ExposeSecret;

    if !validators::is_valid_email(email) {
        return Err(AppError::InvalidInput("Invalid email address".into()));
    }
    if !validators::is_present(password.expose_secret()) {
        return Err(AppError::InvalidInput("Password is required".into()));
    }
    Ok(())
}

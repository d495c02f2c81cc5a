//! Test app state builder for HTTP-level integration testing.
//!
//! `TestAppStateBuilder` creates a minimal `AppState` around a
//! `StubAuthGateway` so routes and the session guard can be driven with
//! `axum_test::TestServer`.

use std::net::SocketAddr;
use std::sync::Arc;

use time::Duration;
use url::Url;

use crate::{
    adapters::http::app_state::AppState,
    application::use_cases::{
        documents::DocumentUseCases, drafts::DraftUseCases, session::SessionUseCases,
    },
    domain::entities::route::RouteTable,
    infra::config::AppConfig,
    test_utils::{StubAuthGateway, StubContentGateway},
};

/// Builder for creating `AppState` with a scripted remote auth API.
///
/// # Example
///
/// ```ignore
/// let (app_state, gateway) = TestAppStateBuilder::new()
///     .with_gateway(StubAuthGateway::new().with_refresh(StubReply::Reject))
///     .build();
/// ```
pub struct TestAppStateBuilder {
    gateway: StubAuthGateway,
    content: StubContentGateway,
    production: bool,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self {
            gateway: StubAuthGateway::new(),
            content: StubContentGateway::new(),
            production: false,
        }
    }

    pub fn with_gateway(mut self, gateway: StubAuthGateway) -> Self {
        self.gateway = gateway;
        self
    }

    pub fn with_content(mut self, content: StubContentGateway) -> Self {
        self.content = content;
        self
    }

    pub fn production(mut self) -> Self {
        self.production = true;
        self
    }

    /// Build the state and hand back the auth gateway for call assertions.
    pub fn build(self) -> (AppState, Arc<StubAuthGateway>) {
        let (app_state, gateway, _content) = self.build_with_content();
        (app_state, gateway)
    }

    /// Like `build`, also handing back the document/draft stub.
    pub fn build_with_content(self) -> (AppState, Arc<StubAuthGateway>, Arc<StubContentGateway>) {
        let config = AppConfig {
            api_base_url: Url::parse("http://api.test").expect("test URL should parse"),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            production: self.production,
            access_cookie_max_age: Duration::days(1),
            refresh_cookie_max_age: Duration::days(30),
        };

        let gateway = Arc::new(self.gateway);
        let content = Arc::new(self.content);
        let session_use_cases = SessionUseCases::new(gateway.clone(), RouteTable::STANDARD);

        let app_state = AppState {
            config: Arc::new(config),
            session_use_cases: Arc::new(session_use_cases),
            document_use_cases: Arc::new(DocumentUseCases::new(content.clone())),
            draft_use_cases: Arc::new(DraftUseCases::new(content.clone())),
        };
        (app_state, gateway, content)
    }
}

use crate::{
    adapters::{
        http::app_state::AppState, remote_api::HttpContentGateway, remote_auth::HttpAuthGateway,
    },
    domain::entities::route::RouteTable,
    infra::{config::AppConfig, http_client::try_build_client},
    use_cases::{
        documents::{DocumentUseCases, DocumentsGateway},
        drafts::{DraftUseCases, DraftsGateway},
        session::{AuthGateway, SessionUseCases},
    },
};
use std::fs::File;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub async fn init_app_state() -> anyhow::Result<AppState> {
    let config = AppConfig::from_env();

    let client = try_build_client()?;
    let gateway = Arc::new(HttpAuthGateway::new(client.clone(), &config.api_base_url));
    let content = Arc::new(HttpContentGateway::new(client, &config.api_base_url));

    let session_use_cases =
        SessionUseCases::new(gateway as Arc<dyn AuthGateway>, RouteTable::STANDARD);
    let document_use_cases = DocumentUseCases::new(content.clone() as Arc<dyn DocumentsGateway>);
    let draft_use_cases = DraftUseCases::new(content as Arc<dyn DraftsGateway>);

    Ok(AppState {
        config: Arc::new(config),
        session_use_cases: Arc::new(session_use_cases),
        document_use_cases: Arc::new(document_use_cases),
        draft_use_cases: Arc::new(draft_use_cases),
    })
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "docudraft=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .pretty();

    // File (structured JSON logs); skipped when the working directory is read-only.
    let json_layer = File::create("app.log").ok().map(|file| {
        fmt::layer()
            .json()
            .with_writer(file)
            .with_current_span(true)
            .with_span_list(true)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();
}

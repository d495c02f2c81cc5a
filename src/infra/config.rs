use std::net::SocketAddr;

use env_helpers::get_env_default;
use time::Duration;
use url::Url;

pub struct AppConfig {
    /// Base URL of the document/drafting API, e.g. `http://localhost:8002`.
    pub api_base_url: Url,
    pub bind_addr: SocketAddr,
    /// Production deployments mark every credential cookie `Secure`.
    pub production: bool,
    /// Lifetime of the `access_token` and `client_token` cookies.
    pub access_cookie_max_age: Duration,
    pub refresh_cookie_max_age: Duration,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let api_base_url: Url = get_env_default(
            "API_BASE_URL",
            "http://localhost:8002"
                .parse()
                .expect("default API_BASE_URL must parse"),
        );
        let bind_addr: SocketAddr = get_env_default(
            "BIND_ADDR",
            "127.0.0.1:3000"
                .parse()
                .expect("default BIND_ADDR must parse"),
        );
        let app_env: String = get_env_default("APP_ENV", "development".to_string());

        let access_cookie_max_age_secs: i64 = get_env_default("ACCESS_COOKIE_MAX_AGE_SECS", 86_400);
        let refresh_cookie_max_age_days: i64 = get_env_default("REFRESH_COOKIE_MAX_AGE_DAYS", 30);

        Self {
            api_base_url,
            bind_addr,
            production: is_production(&app_env),
            access_cookie_max_age: Duration::seconds(access_cookie_max_age_secs),
            refresh_cookie_max_age: Duration::days(refresh_cookie_max_age_days),
        }
    }
}

fn is_production(app_env: &str) -> bool {
    app_env.trim().eq_ignore_ascii_case("production")
}

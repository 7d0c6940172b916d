mod config;
mod shop;

use std::sync::LazyLock;

use axum::{Router, routing::get};
use tracing_subscriber::EnvFilter;

pub use crate::config::Config;
pub use crate::shop::ShopClient;

pub static CONFIG: LazyLock<Config> =
    LazyLock::new(|| Config::from_env().expect("invalid configuration"));

pub static SHOP_CLIENT: LazyLock<ShopClient> = LazyLock::new(|| {
    ShopClient::new(CONFIG.backend_url.clone(), CONFIG.backend_token.clone())
});

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
}

/// Extra axum routes merged into the Dioxus server. Also forces the
/// configuration so a bad environment fails at startup, not on the first
/// request.
pub async fn init() -> anyhow::Result<Router> {
    let config = Config::from_env()?;
    tracing::info!(backend = %config.backend_url, "shop backend configured");

    Ok(Router::new().route("/healthz", get(|| async { "ok" })))
}

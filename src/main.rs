//! PageHub Server: localized content and user administration API.
//!
//! Main entry point that loads configuration, sets up logging, loads the
//! message catalog, and starts the server.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt};

use pagehub_core::LocaleStore;
use pagehub_core::config::AppConfig;

#[tokio::main]
async fn main() {
    let env = std::env::var("PAGEHUB_ENV").unwrap_or_else(|_| "development".to_string());
    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!(%env, "Configuration loaded");

    if let Err(e) = run(config).await {
        tracing::error!(error = %format!("{e:#}"), "Server error");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

async fn run(config: AppConfig) -> anyhow::Result<()> {
    tracing::info!("Starting PageHub v{}", env!("CARGO_PKG_VERSION"));

    let locales = LocaleStore::new(config.i18n.default_locale.clone());
    locales
        .load_file(&config.i18n.locales_path)
        .with_context(|| format!("failed to load locales from '{}'", config.i18n.locales_path))?;
    tracing::info!(
        path = %config.i18n.locales_path,
        locales = ?locales.locales(),
        default = %locales.default_locale(),
        "Message catalog loaded"
    );

    pagehub_api::run_server(Arc::new(config), Arc::new(locales)).await
}

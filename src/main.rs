//! Mimic UI - Main Entry Point
//!
//! Loads the configuration, builds the stores and prints their initial
//! state as JSON.

use mimic_ui::app::AppStores;
use mimic_ui::domain::AppConfig;
use mimic_ui::helpers::is_development;
use serde_json::json;

fn main() {
    // Initialize tracing for logging
    let level = if is_development() {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting Mimic UI...");

    let config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to load config, using defaults");
        AppConfig::default()
    });
    let stores = AppStores::init(&config);

    let snapshot = json!({
        "ui": stores.ui.snapshot(),
        "mocks": stores.mocks.snapshot(),
        "requestLog": stores.request_log.snapshot(),
    });

    match serde_json::to_string_pretty(&snapshot) {
        Ok(text) => println!("{text}"),
        Err(e) => tracing::error!(error = %e, "Failed to serialize state"),
    }
}

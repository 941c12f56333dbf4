//! # stock-app
//!
//! Root component and startup wiring for the Stock Insight dashboard.

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use stock_client::{provide_stock_client, ClientConfig, DEFAULT_ENDPOINT};
use stock_components::{Dashboard, Tooltip};
use stock_state::provide_app_state;
use tracing::Level;
use tracing_subscriber::{filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Startup configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub title: String,
    pub endpoint: String,
    pub drop_stale_responses: bool,
    pub log_level: Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Stock Insight".to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            drop_stale_responses: false,
            log_level: Level::INFO,
        }
    }
}

impl AppConfig {
    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint = url.into();
        self
    }

    pub fn drop_stale(mut self, drop: bool) -> Self {
        self.drop_stale_responses = drop;
        self
    }

    pub fn log_level(mut self, level: Level) -> Self {
        self.log_level = level;
        self
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.endpoint.clone()).drop_stale(self.drop_stale_responses)
    }
}

/// Route `tracing` output to the browser console
pub fn init_logging(level: Level) {
    let wasm_layer = tracing_wasm::WASMLayer::new(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(level)
            .build(),
    );

    let installed = tracing_subscriber::registry()
        .with(LevelFilter::from_level(level))
        .with(wasm_layer)
        .try_init();

    if installed.is_err() {
        tracing::warn!("Tracing subscriber already installed");
    }
}

#[component]
pub fn App(#[prop(optional)] config: Option<AppConfig>) -> impl IntoView {
    let config = config.unwrap_or_default();
    provide_meta_context();

    let state = provide_app_state();
    let client = provide_stock_client(state, config.client_config());
    tracing::info!("Stock Insight started, data endpoint {}", client.config().endpoint);

    view! {
        <Title text=config.title />
        <Dashboard />
        <Tooltip />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config() {
        let config = AppConfig::default();
        assert_eq!(config.endpoint, "/get_stock_data");
        assert_eq!(config.log_level, Level::INFO);

        let client = AppConfig::default()
            .endpoint("http://localhost:5000/get_stock_data")
            .drop_stale(true)
            .client_config();
        assert_eq!(client.endpoint, "http://localhost:5000/get_stock_data");
        assert!(client.drop_stale_responses);
    }
}

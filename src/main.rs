//! Application entry point.
//!
//! Initializes tracing, loads configuration from a TOML file, wires the
//! completion provider into the horoscope service, sets up the Axum router,
//! and starts the HTTP server with graceful shutdown.

use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stargazer::config::{AppConfig, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER};
use stargazer::horoscope::{provider::OpenRouterProvider, HoroscopeService};
use stargazer::http::shutdown::shutdown_signal;
use stargazer::routes::create_router;
use stargazer::state::AppState;

/// Stargazer: an AI-powered horoscope web service
#[derive(Parser, Debug)]
#[command(name = "stargazer", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Log level filter (e.g., "stargazer=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration
    let config = AppConfig::load(&args.config)?;

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Loaded configuration");
    tracing::info!(
        base_url = %config.provider.base_url,
        model = %config.provider.model,
        timeout_secs = config.provider.timeout_seconds,
        has_credentials = config.provider.has_credentials(),
        "Completion provider configured"
    );

    if !config.provider.has_credentials() {
        tracing::warn!(
            "No provider API key set; every horoscope will come from the fallback table"
        );
    }

    // Wire the provider into the horoscope service
    let provider = OpenRouterProvider::new(config.provider.clone());
    let horoscopes = HoroscopeService::new(Arc::new(provider));

    // Create application state and router
    let state = AppState::new(config.clone(), horoscopes);
    let app = create_router(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.http.host, config.http.port)
        .parse()
        .expect("Invalid http.host or http.port in config");
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

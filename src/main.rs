mod auth;
mod config;
mod dataset;
mod endpoints;
mod errors;
mod handlers;
mod lookup;
mod service;
mod shape;

use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::dataset::Dataset;
use crate::handlers::AppState;

/// Main entry point for the application.
///
/// Initializes tracing, loads configuration and both datasets, then starts
/// the Axum server. Datasets are loaded before the listener binds so no
/// request is ever served against a partially initialized store.
///
/// # Returns
///
/// * `anyhow::Result<()>` - Ok if the server runs successfully, or an error
///   if initialization fails.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rust_lookup_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded successfully");

    // Load both datasets up front; they stay immutable for the process lifetime
    let accounts = Dataset::load(&config.accounts_path)?;
    tracing::info!(
        "Loaded {} account records from {}",
        accounts.len(),
        config.accounts_path
    );
    let orders = Dataset::load(&config.orders_path)?;
    tracing::info!(
        "Loaded {} order records from {}",
        orders.len(),
        config.orders_path
    );

    // Build application state
    let app_state = Arc::new(AppState {
        config: config.clone(),
        accounts,
        orders,
    });

    let app = handlers::router(app_state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

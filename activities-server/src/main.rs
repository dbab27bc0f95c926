use std::sync::Arc;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use activities_server::{
    build_router,
    monitoring::{self, MonitoringLayer},
    ActivityStore, AppState, ServerConfig, ServerResult,
};

#[tokio::main]
async fn main() -> ServerResult<()> {
    let config = ServerConfig::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("activities_server=debug,tower_http=debug")),
        )
        .init();

    if config.monitoring {
        use colored::*;
        tracing::info!("{}", "🏫 Activities Server with Monitoring".bold().cyan());
        tracing::info!("{}", "===================================".cyan());
        tracing::info!("");
    }

    let catalog = match config.load_catalog() {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!(%e, "Failed to load activity catalog");
            return Err(e);
        }
    };

    let store = ActivityStore::new(catalog).with_capacity_enforcement(config.enforce_capacity);
    tracing::info!(
        activities = store.len(),
        enforce_capacity = store.enforces_capacity(),
        "Activity directory ready"
    );

    let mut state = AppState::new(store);
    if config.monitoring {
        let (tx, rx) = tokio::sync::mpsc::channel(1000);
        monitoring::spawn_monitoring_display(rx).await;
        state = state.with_monitoring(MonitoringLayer::new(tx));
    }

    let app = build_router(Arc::new(state), &config);

    tracing::info!("Starting activities server on {}", config.bind_address);

    let listener = match tokio::net::TcpListener::bind(&config.bind_address).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(%e, addr = %config.bind_address);
            return Err(e.into());
        }
    };
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(%e, addr = %config.bind_address);
    }

    Ok(())
}

pub mod api;
pub mod config;
pub mod errors;
pub mod monitoring;
pub mod store;

use std::sync::Arc;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

pub use config::ServerConfig;
pub use errors::{ApiError, ServerError, ServerResult};
pub use store::ActivityStore;

pub struct AppState {
    pub store: ActivityStore,
    pub monitoring: Option<monitoring::MonitoringLayer>,
}

impl AppState {
    pub fn new(store: ActivityStore) -> Self {
        Self {
            store,
            monitoring: None,
        }
    }

    pub fn with_monitoring(mut self, monitoring: monitoring::MonitoringLayer) -> Self {
        self.monitoring = Some(monitoring);
        self
    }
}

pub fn build_router(state: Arc<AppState>, config: &ServerConfig) -> Router {
    let mut app = Router::new()
        .route("/", get(api::root))
        .route("/activities", get(api::list_activities))
        .route("/activities/:name", get(api::get_activity))
        .route("/activities/:name/signup", post(api::signup))
        .route("/activities/:name/unregister", post(api::unregister))
        .route("/health", get(api::health));

    if config.enable_reset {
        app = app.route("/test/reset", post(api::reset_state));
    }

    app.nest_service("/static", ServeDir::new(&config.static_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use super::health;
use super::models;
use super::state::AppState;

/// Create the full router with application state
pub fn create_router_with_state(state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // Catalogue API
        .nest("/api", create_catalogue_router())
        // Add state and middleware
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Create the catalogue API router
fn create_catalogue_router() -> Router<AppState> {
    Router::new()
        .route(
            "/models",
            get(models::list_models).post(models::register_model),
        )
        .route("/models/{model_id}", delete(models::unregister_model))
        .route(
            "/models/{model_id}/phenotypes",
            get(models::list_phenotypes),
        )
        .route(
            "/models/{model_id}/phenotype_prediction",
            post(models::predict_phenotype),
        )
}

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::health;
use super::packages;
use super::state::AppState;

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/packages/", get(packages::list_packages))
        .route("/packages/", post(packages::create_package))
        .route("/packages/search/", get(packages::search_packages))
        .route("/packages/{id}", get(packages::get_package))
        .route("/packages/{id}", put(packages::update_package))
        .route("/packages/{id}", delete(packages::delete_package))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

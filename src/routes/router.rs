use crate::config::CorsConfig;
use crate::cors::build_cors_layer;
use crate::error::AppResult;
use crate::middleware::request_id_middleware;
use axum::middleware;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use super::health;

/// Create application router
///
/// Only `GET /health` is routed; any other path falls through to axum's
/// default 404. The CORS layer wraps the fallback too, so preflights are
/// answered for every path.
pub fn create_router(cors_config: &CorsConfig) -> AppResult<axum::Router> {
    let cors = build_cors_layer(cors_config)?;

    Ok(axum::Router::new()
        .route("/health", get(health::health_check))
        .layer(cors)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http()))
}

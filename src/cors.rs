//! CORS middleware construction.
//!
//! The whole policy lives in one `CorsLayer` wrapped around the router, so it
//! applies to every path, including ones no route matches. Preflight `OPTIONS`
//! requests are answered by the layer itself and never reach a handler.

use crate::config::CorsConfig;
use crate::error::{AppError, AppResult};
use http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Build the CORS layer for the configured origins.
///
/// Matching origins are echoed back in `Access-Control-Allow-Origin`, every
/// method and request header is allowed, and `allow_credentials` is left
/// unset so credentialed cross-origin requests are not granted. Requests from
/// other origins are still served, just without any grant headers.
pub fn build_cors_layer(config: &CorsConfig) -> AppResult<CorsLayer> {
    let allow_origin = if config.allows_any_origin() {
        AllowOrigin::any()
    } else {
        let origins = config
            .allowed_origins
            .iter()
            .map(|s| {
                s.parse::<HeaderValue>()
                    .map_err(|_| AppError::InvalidOrigin(s.clone()))
            })
            .collect::<AppResult<Vec<_>>>()?;
        AllowOrigin::list(origins)
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any))
}

use crate::routes::types::HealthResponse;
use axum::Json;

/// Liveness probe: answers `{"ok": true}` for as long as the process serves.
#[axum::debug_handler]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}

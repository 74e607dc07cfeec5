use axum::response::Json;

use insurance_types::HealthResponse;

/// GET /health - liveness check
pub async fn health() -> Json<HealthResponse> {
	Json(HealthResponse::ok())
}

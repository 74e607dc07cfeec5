use serde::Serialize;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
	pub status: String,
	pub message: String,
}

impl HealthResponse {
	/// Healthy response with the fixed service banner
	pub fn ok() -> Self {
		Self {
			status: "OK".to_string(),
			message: "Insurance Quote API is running".to_string(),
		}
	}
}

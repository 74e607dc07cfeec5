use std::any::Any;

use axum::{
	http::StatusCode,
	response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use tracing::error;

/// Error response format shared by handlers
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
	pub error: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub message: Option<String>,
}

impl ErrorResponse {
	pub fn new(error: impl Into<String>) -> Self {
		Self {
			error: error.into(),
			message: None,
		}
	}

	pub fn with_message(error: impl Into<String>, message: impl Into<String>) -> Self {
		Self {
			error: error.into(),
			message: Some(message.into()),
		}
	}
}

/// Fallback handler for routes the router does not know
pub async fn route_not_found() -> (StatusCode, Json<ErrorResponse>) {
	(
		StatusCode::NOT_FOUND,
		Json(ErrorResponse::new("Route not found")),
	)
}

/// Terminal handler for panics escaping a request handler
///
/// The panic is logged server-side; the caller only sees the generic
/// error body.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
	let detail = if let Some(s) = err.downcast_ref::<String>() {
		s.as_str()
	} else if let Some(s) = err.downcast_ref::<&str>() {
		s
	} else {
		"unknown panic"
	};
	error!("request handler panicked: {detail}");

	(
		StatusCode::INTERNAL_SERVER_ERROR,
		Json(ErrorResponse::new("Internal server error")),
	)
		.into_response()
}

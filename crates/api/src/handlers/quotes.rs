use axum::{
	extract::{rejection::JsonRejection, State},
	http::StatusCode,
	response::Json,
};
use tracing::{error, info};

use crate::handlers::common::ErrorResponse;
use crate::state::AppState;
use insurance_types::{QuoteRequest, QuoteResponse};

/// POST /quote - price a premium quote
pub async fn post_quote(
	State(state): State<AppState>,
	body: Result<Json<QuoteRequest>, JsonRejection>,
) -> Result<Json<QuoteResponse>, (StatusCode, Json<ErrorResponse>)> {
	// Unreadable bodies surface as the terminal error response, the same
	// way body-parser failures do.
	let Json(request) = body.map_err(|rejection| {
		error!("failed to read quote request body: {rejection}");
		(
			StatusCode::INTERNAL_SERVER_ERROR,
			Json(ErrorResponse::new("Something went wrong!")),
		)
	})?;

	let input = request.validate().map_err(|e| {
		info!("rejected quote request: {e}");
		(
			StatusCode::BAD_REQUEST,
			Json(ErrorResponse::with_message("Invalid input", e.to_string())),
		)
	})?;

	let quote = state.quote_service.calculate(&input);
	info!(
		vehicle = input.vehicle_type.as_str(),
		final_premium = quote.final_premium,
		status = quote.status.as_str(),
		"quote calculated"
	);

	Ok(Json(QuoteResponse::from(quote)))
}

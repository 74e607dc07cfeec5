use axum::{
	routing::{get, post},
	Router,
};
use tower::ServiceBuilder;
use tower_http::{
	catch_panic::CatchPanicLayer,
	compression::CompressionLayer,
	cors::CorsLayer,
	limit::RequestBodyLimitLayer,
	request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
	trace::TraceLayer,
};
use tracing::Level;

use crate::handlers::{handle_panic, health, post_quote, route_not_found};
use crate::security::add_security_headers;
use crate::state::AppState;
use insurance_types::constants::limits::MAX_REQUEST_BODY_BYTES;

pub fn create_router() -> Router<AppState> {
	// Layers prepared first so the route block below stays readable
	let cors = CorsLayer::permissive();
	let body_limit = RequestBodyLimitLayer::new(MAX_REQUEST_BODY_BYTES);
	let trace = TraceLayer::new_for_http()
		.make_span_with(|req: &axum::http::Request<_>| {
			let req_id = req
				.headers()
				.get("x-request-id")
				.and_then(|v| v.to_str().ok())
				.unwrap_or("-");
			tracing::info_span!(
				"http_request",
				method = %req.method(),
				uri = %req.uri(),
				req_id
			)
		})
		.on_request(tower_http::trace::DefaultOnRequest::new().level(Level::INFO))
		.on_response(
			tower_http::trace::DefaultOnResponse::new()
				.level(Level::INFO)
				.latency_unit(tower_http::LatencyUnit::Millis),
		);
	let req_id = ServiceBuilder::new()
		.layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
		.layer(PropagateRequestIdLayer::x_request_id());

	let router = Router::new()
		.route("/quote", post(post_quote))
		.route("/quote/", post(post_quote))
		.route("/health", get(health))
		.route("/health/", get(health))
		.fallback(route_not_found)
		.layer(cors)
		.layer(CompressionLayer::new())
		.layer(trace)
		.layer(req_id)
		.layer(body_limit)
		.layer(CatchPanicLayer::custom(handle_panic));

	add_security_headers(router)
}

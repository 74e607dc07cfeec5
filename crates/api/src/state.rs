use std::sync::Arc;

use insurance_service::QuoteServiceTrait;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
	pub quote_service: Arc<dyn QuoteServiceTrait>,
}

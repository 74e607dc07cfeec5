//! Quote response model

use serde::Serialize;
use serde_json::Number;

use crate::models::AgeCategory;

use super::{Quote, QuoteStatus};

/// API response body for a priced quote
///
/// Wire-format projection of the domain `Quote`, serialized in camelCase.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
	/// Vehicle type echoed as the caller spelled it
	pub vehicle_type: String,
	/// Driver age echoed as the caller sent it
	pub driver_age: Number,
	pub age_category: AgeCategory,
	pub base_premium: u32,
	pub age_multiplier: f64,
	pub final_premium: f64,
	pub currency: String,
	pub status: QuoteStatus,
	pub message: String,
}

impl From<Quote> for QuoteResponse {
	fn from(quote: Quote) -> Self {
		Self {
			vehicle_type: quote.vehicle_type,
			driver_age: quote.driver_age,
			age_category: quote.age_category,
			base_premium: quote.base_premium,
			age_multiplier: quote.age_multiplier,
			final_premium: quote.final_premium,
			currency: quote.currency,
			status: quote.status,
			message: quote.message,
		}
	}
}

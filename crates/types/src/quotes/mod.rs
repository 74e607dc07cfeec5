//! Core quote domain model and classification logic

use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::constants::limits::HIGH_RISK_PREMIUM_THRESHOLD;
use crate::models::AgeCategory;

pub mod errors;
pub mod request;
pub mod response;

pub use errors::QuoteValidationError;
pub use request::{QuoteRequest, ValidatedQuote};
pub use response::QuoteResponse;

/// Result type for quote validation operations
pub type QuoteValidationResult<T> = Result<T, QuoteValidationError>;

/// A fully priced premium quote
///
/// This represents a quote in the domain layer. It is produced by the
/// calculator and converted to `QuoteResponse` at the API boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
	/// Vehicle type exactly as the caller spelled it
	pub vehicle_type: String,

	/// Driver age exactly as the caller sent it
	pub driver_age: Number,

	/// Risk bucket derived from the driver age
	pub age_category: AgeCategory,

	/// Base rate for the vehicle type before adjustments
	pub base_premium: u32,

	/// Multiplier applied for the age category
	pub age_multiplier: f64,

	/// Final premium after all adjustments, rounded to cents
	pub final_premium: f64,

	/// Currency the premium is denominated in
	pub currency: String,

	/// Classification of the final premium
	pub status: QuoteStatus,

	/// Human-readable summary for the caller
	pub message: String,
}

impl Quote {
	/// Whether this quote was classified above the high-risk threshold
	pub fn is_high_risk(&self) -> bool {
		self.status == QuoteStatus::Peasant
	}
}

/// Quote classification by final premium
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStatus {
	/// Standard premium within the expected range
	Premium,
	/// High-risk profile with a premium above the standard threshold
	Peasant,
}

impl QuoteStatus {
	/// Classify a final premium against the high-risk threshold
	pub fn from_premium(premium: f64) -> Self {
		if premium > HIGH_RISK_PREMIUM_THRESHOLD {
			QuoteStatus::Peasant
		} else {
			QuoteStatus::Premium
		}
	}

	/// Fixed status message attached to every quote
	pub fn message(&self) -> &'static str {
		match self {
			QuoteStatus::Premium => "Standard premium calculated successfully",
			QuoteStatus::Peasant => "High-risk profile - premium exceeds standard rates",
		}
	}

	/// Canonical lowercase name
	pub fn as_str(&self) -> &'static str {
		match self {
			QuoteStatus::Premium => "premium",
			QuoteStatus::Peasant => "peasant",
		}
	}
}

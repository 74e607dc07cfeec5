//! Insurance Types
//!
//! Shared models for the insurance quote API. This crate contains the
//! vehicle and age-category domain types, the quote request/response
//! models, and their validation errors.

pub mod constants;
pub mod models;
pub mod quotes;

// Re-export serde_json for convenience
pub use serde_json;

// Re-export commonly used types for convenience
pub use models::{AgeCategory, HealthResponse, VehicleType};

pub use quotes::{
	Quote, QuoteRequest, QuoteResponse, QuoteStatus, QuoteValidationError,
	QuoteValidationResult, ValidatedQuote,
};

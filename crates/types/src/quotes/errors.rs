//! Error types for quote validation

use thiserror::Error;

/// Validation errors for quote requests
///
/// The display strings are part of the API contract: they are returned
/// verbatim as the `message` field of 400 responses.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuoteValidationError {
	#[error("Vehicle type is required and must be a string")]
	VehicleTypeRequired,

	#[error("Driver age is required and must be between 16 and 100")]
	DriverAgeInvalid,

	#[error("Unsupported vehicle type. Supported types: {supported}")]
	UnsupportedVehicleType { supported: String },
}

//! Quote request model and validation

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::constants::limits::{MAX_DRIVER_AGE, MIN_DRIVER_AGE};
use crate::models::VehicleType;

use super::{QuoteValidationError, QuoteValidationResult};

/// API request body for the /quote endpoint
///
/// Both fields are kept as raw JSON values so that missing or wrongly
/// typed input reaches `validate` and produces the documented error
/// messages instead of a serde rejection.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuoteRequest {
	/// Type of vehicle to insure
	pub vehicle_type: Value,
	/// Age of the driver in years
	pub driver_age: Value,
}

/// A quote request that passed validation
///
/// Carries the typed vehicle plus the caller's original spelling and age
/// number so the response can echo them unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedQuote {
	pub vehicle_type: VehicleType,
	pub vehicle_input: String,
	pub driver_age: Number,
}

impl ValidatedQuote {
	/// Driver age as a float for premium arithmetic
	pub fn age(&self) -> f64 {
		self.driver_age.as_f64().unwrap_or(0.0)
	}
}

impl QuoteRequest {
	/// Construct a request from already-typed values
	pub fn new(vehicle_type: impl Into<String>, driver_age: u64) -> Self {
		Self {
			vehicle_type: Value::String(vehicle_type.into()),
			driver_age: Value::Number(Number::from(driver_age)),
		}
	}

	/// Validate the quote request
	///
	/// Rules are applied in order and the first failure wins:
	/// 1. `vehicleType` must be a non-empty string.
	/// 2. `driverAge` must be a number between 16 and 100 inclusive. A
	///    zero age fails the presence check, same as an absent field.
	/// 3. The lowercased vehicle type must be in the supported table.
	pub fn validate(&self) -> QuoteValidationResult<ValidatedQuote> {
		let vehicle_input = match self.vehicle_type.as_str() {
			Some(input) if !input.is_empty() => input.to_string(),
			_ => return Err(QuoteValidationError::VehicleTypeRequired),
		};

		let driver_age = match self.driver_age.as_number() {
			Some(number) => number.clone(),
			None => return Err(QuoteValidationError::DriverAgeInvalid),
		};
		let age = driver_age.as_f64().unwrap_or(f64::NAN);
		if age == 0.0 || !(MIN_DRIVER_AGE..=MAX_DRIVER_AGE).contains(&age) {
			return Err(QuoteValidationError::DriverAgeInvalid);
		}

		let vehicle_type = VehicleType::from_input(&vehicle_input).ok_or_else(|| {
			QuoteValidationError::UnsupportedVehicleType {
				supported: VehicleType::supported_list(),
			}
		})?;

		Ok(ValidatedQuote {
			vehicle_type,
			vehicle_input,
			driver_age,
		})
	}
}

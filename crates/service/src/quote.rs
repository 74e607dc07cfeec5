//! Premium calculation over the static rate tables

use tracing::debug;

use insurance_types::{AgeCategory, Quote, QuoteStatus, ValidatedQuote, VehicleType};

/// Motorcycle riders younger than this pay the surcharge below
const YOUNG_MOTORCYCLE_AGE: f64 = 21.0;
const YOUNG_MOTORCYCLE_SURCHARGE: f64 = 1.5;

/// Truck drivers older than this pay the surcharge below
const SENIOR_TRUCK_AGE: f64 = 70.0;
const SENIOR_TRUCK_SURCHARGE: f64 = 1.2;

/// Car drivers inside this age window get the discount below
const PRIME_AGE_MIN: f64 = 30.0;
const PRIME_AGE_MAX: f64 = 50.0;
const PRIME_AGE_CAR_DISCOUNT: f64 = 0.9;

/// Premium calculation over validated quote input
///
/// Object-safe so the API layer can hold the calculator behind an
/// `Arc<dyn QuoteServiceTrait>` and tests can substitute their own.
pub trait QuoteServiceTrait: Send + Sync {
	/// Price a validated quote request
	fn calculate(&self, input: &ValidatedQuote) -> Quote;
}

/// Default premium calculator over the built-in rate tables
#[derive(Debug, Clone, Copy, Default)]
pub struct QuoteService;

impl QuoteService {
	pub fn new() -> Self {
		Self
	}
}

impl QuoteServiceTrait for QuoteService {
	/// Derive the premium for a validated request
	///
	/// The base rate is scaled by the age-category multiplier, then each
	/// conditional adjustment compounds on the running premium in a fixed
	/// order, then the result is rounded to cents and classified.
	fn calculate(&self, input: &ValidatedQuote) -> Quote {
		let vehicle = input.vehicle_type;
		let age = input.age();

		let base_rate = vehicle.base_rate();
		let age_category = AgeCategory::from_age(age);
		let age_multiplier = age_category.multiplier();

		let mut premium = f64::from(base_rate) * age_multiplier;

		if vehicle == VehicleType::Motorcycle && age < YOUNG_MOTORCYCLE_AGE {
			premium *= YOUNG_MOTORCYCLE_SURCHARGE;
		}
		if vehicle == VehicleType::Truck && age > SENIOR_TRUCK_AGE {
			premium *= SENIOR_TRUCK_SURCHARGE;
		}
		if (PRIME_AGE_MIN..=PRIME_AGE_MAX).contains(&age) && vehicle == VehicleType::Car {
			premium *= PRIME_AGE_CAR_DISCOUNT;
		}

		let final_premium = round_to_cents(premium);
		let status = QuoteStatus::from_premium(final_premium);

		debug!(
			vehicle = vehicle.as_str(),
			age,
			category = age_category.as_str(),
			final_premium,
			status = status.as_str(),
			"priced quote"
		);

		Quote {
			vehicle_type: input.vehicle_input.clone(),
			driver_age: input.driver_age.clone(),
			age_category,
			base_premium: base_rate,
			age_multiplier,
			final_premium,
			currency: "USD".to_string(),
			status,
			message: status.message().to_string(),
		}
	}
}

/// Round half away from zero to 2 decimal places
fn round_to_cents(value: f64) -> f64 {
	(value * 100.0).round() / 100.0
}

//! Vehicle types and driver age categories with their rate tables

use std::fmt;

use serde::{Deserialize, Serialize};

/// Supported vehicle types
///
/// Each type carries a fixed base premium rate. Variant order is the
/// rate-table order and drives the "Supported types" list in validation
/// errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
	Car,
	Truck,
	Motorcycle,
	Suv,
	Van,
}

impl VehicleType {
	/// All supported vehicle types, in rate-table order
	pub const ALL: [VehicleType; 5] = [
		VehicleType::Car,
		VehicleType::Truck,
		VehicleType::Motorcycle,
		VehicleType::Suv,
		VehicleType::Van,
	];

	/// Parse a vehicle type, ignoring case
	pub fn from_input(input: &str) -> Option<Self> {
		match input.to_lowercase().as_str() {
			"car" => Some(VehicleType::Car),
			"truck" => Some(VehicleType::Truck),
			"motorcycle" => Some(VehicleType::Motorcycle),
			"suv" => Some(VehicleType::Suv),
			"van" => Some(VehicleType::Van),
			_ => None,
		}
	}

	/// Canonical lowercase name
	pub fn as_str(&self) -> &'static str {
		match self {
			VehicleType::Car => "car",
			VehicleType::Truck => "truck",
			VehicleType::Motorcycle => "motorcycle",
			VehicleType::Suv => "suv",
			VehicleType::Van => "van",
		}
	}

	/// Base premium rate before any age or risk adjustment
	pub fn base_rate(&self) -> u32 {
		match self {
			VehicleType::Car => 1200,
			VehicleType::Truck => 1800,
			VehicleType::Motorcycle => 800,
			VehicleType::Suv => 1500,
			VehicleType::Van => 1400,
		}
	}

	/// Comma-joined list of supported types, in rate-table order
	pub fn supported_list() -> String {
		Self::ALL
			.iter()
			.map(|vehicle| vehicle.as_str())
			.collect::<Vec<_>>()
			.join(", ")
	}
}

impl fmt::Display for VehicleType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Coarse driver risk bucket derived from age
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeCategory {
	Young,
	Adult,
	Senior,
}

impl AgeCategory {
	/// Bucket a driver age
	///
	/// Young and adult are bounded inclusive ranges; anything outside them
	/// falls through to senior. The fallback is deliberate: unvalidated
	/// ages must land in senior rather than fail.
	pub fn from_age(age: f64) -> Self {
		if (16.0..=25.0).contains(&age) {
			AgeCategory::Young
		} else if (26.0..=65.0).contains(&age) {
			AgeCategory::Adult
		} else {
			AgeCategory::Senior
		}
	}

	/// Risk multiplier applied to the base rate
	pub fn multiplier(&self) -> f64 {
		match self {
			AgeCategory::Young => 1.8,
			AgeCategory::Adult => 1.0,
			AgeCategory::Senior => 1.3,
		}
	}

	/// Canonical lowercase name
	pub fn as_str(&self) -> &'static str {
		match self {
			AgeCategory::Young => "young",
			AgeCategory::Adult => "adult",
			AgeCategory::Senior => "senior",
		}
	}
}

impl fmt::Display for AgeCategory {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

//! Global limits and defaults for validation and pricing

/// Minimum driver age accepted by the validator (inclusive)
pub const MIN_DRIVER_AGE: f64 = 16.0;

/// Maximum driver age accepted by the validator (inclusive)
pub const MAX_DRIVER_AGE: f64 = 100.0;

/// Final premiums strictly above this value are classified as high risk
pub const HIGH_RISK_PREMIUM_THRESHOLD: f64 = 2500.0;

/// Maximum accepted request body size in bytes
pub const MAX_REQUEST_BODY_BYTES: usize = 1024 * 1024; // 1MiB

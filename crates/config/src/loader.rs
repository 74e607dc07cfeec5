//! Configuration loading utilities

use std::env;

use config::{Config, File};
use thiserror::Error;

use crate::Settings;

/// Errors raised while loading configuration
#[derive(Error, Debug)]
pub enum ConfigLoadError {
	#[error("failed to read configuration: {0}")]
	Read(#[from] config::ConfigError),

	#[error("invalid PORT value '{value}': {source}")]
	InvalidPort {
		value: String,
		source: std::num::ParseIntError,
	},
}

/// Load configuration from the optional config file and the environment
///
/// Reads `config/config.*` when present, falling back to defaults for
/// anything unset. The `PORT` environment variable overrides the
/// configured server port.
pub fn load_config() -> Result<Settings, ConfigLoadError> {
	let s = Config::builder()
		.add_source(File::with_name("config/config").required(false))
		.build()?;

	let mut settings: Settings = s.try_deserialize()?;

	if let Ok(port) = env::var("PORT") {
		settings.server.port = port.parse().map_err(|source| ConfigLoadError::InvalidPort {
			value: port.clone(),
			source,
		})?;
	}

	Ok(settings)
}

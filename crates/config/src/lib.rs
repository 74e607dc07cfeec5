//! Insurance Config
//!
//! Configuration management and startup utilities for the insurance
//! quote API.

pub mod loader;
pub mod settings;
pub mod startup_logger;

pub use loader::{load_config, ConfigLoadError};
pub use settings::{LogFormat, LoggingSettings, ServerSettings, Settings};
pub use startup_logger::{log_service_info, log_startup_complete};

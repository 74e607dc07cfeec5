//! Insurance Quote API Library
//!
//! An HTTP service that prices vehicle insurance premiums from a vehicle
//! type and a driver age.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

// Core domain types - the most commonly used types
pub use insurance_types::{
	// External dependencies for convenience
	serde_json,
	AgeCategory,
	HealthResponse,
	Quote,
	QuoteRequest,
	QuoteResponse,
	QuoteStatus,
	QuoteValidationError,
	ValidatedQuote,
	VehicleType,
};

// Service layer
pub use insurance_service::{QuoteService, QuoteServiceTrait};

// API layer
pub use insurance_api::{create_router, AppState};

// Config
pub use insurance_config::{load_config, log_service_info, log_startup_complete, Settings};

// Module aliases mirroring the crate layout
pub mod types {
	pub use insurance_types::*;
}

pub mod service {
	pub use insurance_service::*;
}

pub mod api {
	pub use insurance_api::*;
}

pub mod config {
	pub use insurance_config::*;
}

/// Builder for configuring and starting the quote server
pub struct ServerBuilder {
	settings: Option<Settings>,
	quote_service: Arc<dyn QuoteServiceTrait>,
}

impl Default for ServerBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl ServerBuilder {
	/// Create a builder with the default premium calculator
	pub fn new() -> Self {
		Self {
			settings: None,
			quote_service: Arc::new(QuoteService::new()),
		}
	}

	/// Set custom settings
	pub fn with_settings(mut self, settings: Settings) -> Self {
		self.settings = Some(settings);
		self
	}

	/// Swap in a custom premium calculator
	pub fn with_quote_service(mut self, quote_service: Arc<dyn QuoteServiceTrait>) -> Self {
		self.quote_service = quote_service;
		self
	}

	/// Assemble the router and application state
	pub fn build(self) -> (axum::Router, AppState) {
		let app_state = AppState {
			quote_service: self.quote_service,
		};
		let router = create_router().with_state(app_state.clone());
		(router, app_state)
	}

	/// Start the complete server with all defaults and setup
	///
	/// Handles everything needed to run the server: loading `.env`,
	/// loading configuration, initializing tracing, binding and serving
	/// the application.
	pub async fn start_server(mut self) -> Result<(), Box<dyn std::error::Error>> {
		// Load .env file if it exists
		dotenvy::dotenv().ok();

		// Use provided settings or load from config with defaults
		let settings = match self.settings.take() {
			Some(settings) => settings,
			None => load_config().unwrap_or_default(),
		};

		init_tracing_from_settings(&settings);
		log_service_info();

		let bind_addr = settings.bind_address();
		let addr: SocketAddr = bind_addr
			.parse()
			.map_err(|e| format!("Invalid bind address '{}': {}", bind_addr, e))?;

		let (app, _state) = self.build();

		let listener = tokio::net::TcpListener::bind(addr).await?;

		log_startup_complete(&bind_addr);
		info!("API endpoints available:");
		info!("  GET  /health");
		info!("  POST /quote");

		axum::serve(listener, app).await?;

		Ok(())
	}
}

/// Initialize tracing with configuration-based settings
fn init_tracing_from_settings(settings: &Settings) {
	use insurance_config::LogFormat;

	// Create env filter using config level or environment variable
	let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&settings.logging.level));

	match settings.logging.format {
		LogFormat::Json => {
			let subscriber = tracing_subscriber::fmt().json().with_env_filter(env_filter);
			if settings.logging.structured {
				subscriber.with_target(true).with_thread_ids(true).init();
			} else {
				subscriber.init();
			}
		},
		LogFormat::Pretty => {
			let subscriber = tracing_subscriber::fmt()
				.pretty()
				.with_env_filter(env_filter);
			if settings.logging.structured {
				subscriber.with_target(true).with_thread_ids(true).init();
			} else {
				subscriber.init();
			}
		},
		LogFormat::Compact => {
			let subscriber = tracing_subscriber::fmt()
				.compact()
				.with_env_filter(env_filter);
			if settings.logging.structured {
				subscriber.with_target(true).with_thread_ids(true).init();
			} else {
				subscriber.init();
			}
		},
	}

	info!(
		"Logging configuration applied: level={}, format={:?}, structured={}",
		settings.logging.level, settings.logging.format, settings.logging.structured
	);
}

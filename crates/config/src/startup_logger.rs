//! Service startup logging for the insurance quote API

use std::env;

use tracing::info;

/// Logs service information at startup
pub fn log_service_info() {
	let service_version = env!("CARGO_PKG_VERSION");

	info!("=== Insurance Quote API Starting ===");
	info!("🚀 Service: insurance-quote v{}", service_version);
	info!("💻 Platform: {} ({})", env::consts::OS, env::consts::ARCH);

	if let Ok(rust_log) = env::var("RUST_LOG") {
		info!("🔧 Log Level: {}", rust_log);
	}

	info!(
		"🕒 Started at: {}",
		chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
	);
}

/// Logs startup completion
pub fn log_startup_complete(bind_address: &str) {
	info!("✅ Insurance Quote API Started Successfully");
	info!("🌐 Server listening on: {}", bind_address);
	info!("📡 Ready to accept requests");
}

//! Insurance Quote API Server
//!
//! Main entry point for the quote server

use insurance_quote::ServerBuilder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	// Start the complete server with all defaults and setup handled automatically
	ServerBuilder::new().start_server().await
}

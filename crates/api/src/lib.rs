//! Insurance API
//!
//! Axum-based API with routes and middleware for the insurance quote
//! service.

pub mod handlers;
pub mod router;
pub mod security;
pub mod state;

pub use router::create_router;
pub use state::AppState;

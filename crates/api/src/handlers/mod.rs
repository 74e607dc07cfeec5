//! HTTP request handlers

pub mod common;
pub mod health;
pub mod quotes;

pub use common::{handle_panic, route_not_found, ErrorResponse};
pub use health::health;
pub use quotes::post_quote;

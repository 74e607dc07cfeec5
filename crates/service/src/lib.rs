//! Insurance Service
//!
//! Core premium calculation logic for the insurance quote API.

pub mod quote;

pub use quote::{QuoteService, QuoteServiceTrait};

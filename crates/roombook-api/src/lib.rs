//! # roombook-api
//!
//! HTTP API layer for Roombook: routes, handlers, DTOs, the auth
//! extractor, and the domain-error-to-HTTP mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;

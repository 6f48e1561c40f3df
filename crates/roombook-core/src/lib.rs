//! # roombook-core
//!
//! Core crate for the Roombook meeting-room booking service. Contains the
//! configuration schemas and the unified error system.
//!
//! This crate has **no** internal dependencies on other Roombook crates.

pub mod config;
pub mod error;
pub mod result;

pub use error::AppError;
pub use result::AppResult;

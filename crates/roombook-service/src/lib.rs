//! # roombook-service
//!
//! Business logic services for Roombook. Each service combines the
//! repositories with the authorization gate and enforces the operation
//! policies: who may create, suspend, or delete users, who may issue
//! reset tokens, and who owns which bookings.

pub mod auth;
pub mod booking;
pub mod context;
pub mod reset;
pub mod room;
pub mod seed;
pub mod user;

pub use context::RequestContext;

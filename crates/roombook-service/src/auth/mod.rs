//! Sign-in and session issuance.

pub mod service;

pub use service::{AuthService, SignInOutcome, redirect_for_role};

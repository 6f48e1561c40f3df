//! Password-reset token lifecycle.

pub mod service;

pub use service::PasswordResetService;

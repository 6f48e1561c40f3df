//! Password-reset token entities.

pub mod model;

pub use model::PasswordResetToken;

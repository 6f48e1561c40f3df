//! User management services.

pub mod admin;

pub use admin::{AdminUserService, CreateUserInput, UpdateUserInput};

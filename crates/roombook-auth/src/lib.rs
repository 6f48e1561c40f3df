//! # roombook-auth
//!
//! Authentication and authorization primitives for Roombook: Argon2id
//! password hashing, HS256 session tokens, and the per-operation
//! authorization gate built on the SUPER_ADMIN > ADMIN > STAFF hierarchy.

pub mod gate;
pub mod jwt;
pub mod password;

pub use gate::AuthorizationGate;
pub use jwt::claims::Claims;
pub use jwt::decoder::JwtDecoder;
pub use jwt::encoder::JwtEncoder;
pub use password::PasswordHasher;

//! Integration test suite.
//!
//! These tests exercise the full HTTP stack against a real PostgreSQL
//! instance and are ignored by default; run them with
//! `cargo test -- --ignored` once a database matching
//! `config/default.toml` (or `ROOMBOOK__DATABASE__URL`) is up.

mod helpers;

mod booking_test;
mod seed_test;
mod users_test;

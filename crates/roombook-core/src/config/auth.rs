//! Authentication and credential configuration.

use serde::{Deserialize, Serialize};

/// Authentication and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256). Loaded once at startup,
    /// never logged.
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Session token TTL in hours.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_hours: u64,
    /// Password-reset token TTL in minutes.
    #[serde(default = "default_reset_ttl")]
    pub reset_token_ttl_minutes: u64,
    /// Minimum password length.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// Default password assigned when an ADMIN account is created without
    /// one. Present for parity with the legacy system; rotate via the
    /// reset-token flow on first login.
    #[serde(default = "default_admin_password")]
    pub default_admin_password: String,
    /// Default password assigned when a STAFF account is created without one.
    #[serde(default = "default_staff_password")]
    pub default_staff_password: String,
    /// Bootstrap SUPER_ADMIN seeded when the users table holds none.
    #[serde(default)]
    pub seed: SeedConfig,
}

/// Bootstrap account configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Whether to seed a SUPER_ADMIN when none exists.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Display name of the seeded account.
    #[serde(default = "default_seed_name")]
    pub name: String,
    /// Email of the seeded account.
    #[serde(default = "default_seed_email")]
    pub email: String,
    /// Initial password of the seeded account. Change in production.
    #[serde(default = "default_seed_password")]
    pub password: String,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            name: default_seed_name(),
            email: default_seed_email(),
            password: default_seed_password(),
        }
    }
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_token_ttl() -> u64 {
    24
}

fn default_reset_ttl() -> u64 {
    60
}

fn default_password_min() -> usize {
    8
}

fn default_admin_password() -> String {
    "admin123".to_string()
}

fn default_staff_password() -> String {
    "staff123".to_string()
}

fn default_true() -> bool {
    true
}

fn default_seed_name() -> String {
    "Super Admin".to_string()
}

fn default_seed_email() -> String {
    "superadmin@example.com".to_string()
}

fn default_seed_password() -> String {
    "SecurePassword123!".to_string()
}

//! Password-reset token entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A single-use, time-bound grant to rotate one user's password.
///
/// Lifecycle: issued with a one-hour window, consumed at most once
/// (`used_at` set), or left to expire. There is no transition back to
/// the issued state.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PasswordResetToken {
    /// Unique record identifier.
    pub id: Uuid,
    /// The user whose password this token may rotate.
    pub user_id: Uuid,
    /// The opaque token value handed to the requester (globally unique).
    pub token: String,
    /// Absolute expiry timestamp.
    pub expires_at: DateTime<Utc>,
    /// When the token was consumed, if ever.
    pub used_at: Option<DateTime<Utc>>,
    /// When the token was issued.
    pub created_at: DateTime<Utc>,
}

impl PasswordResetToken {
    /// A token is usable only while unconsumed and unexpired.
    pub fn is_usable(&self, now: DateTime<Utc>) -> bool {
        self.used_at.is_none() && now < self.expires_at
    }
}

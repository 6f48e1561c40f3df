//! JWT claims structure embedded in session tokens.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use roombook_entity::user::UserRole;

/// Claims payload carried by every session token.
///
/// Tokens are stateless: there is no server-side revocation store, so a
/// token stays verifiable until `exp`. Privileged mutations re-check live
/// account state against the credential store instead of trusting these
/// claims alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user ID.
    pub sub: Uuid,
    /// User role at the time of token issuance.
    pub role: UserRole,
    /// Email address for convenience.
    pub email: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Checks whether this token has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

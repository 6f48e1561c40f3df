//! Request context carrying the authenticated identity.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use roombook_auth::Claims;
use roombook_entity::user::UserRole;

/// Context for the current authenticated request.
///
/// Extracted from the session token by middleware and passed into service
/// methods so that every operation knows *who* is acting. The role here is
/// the role at token-issuance time; privileged mutations re-check the live
/// account record before acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: Uuid,
    /// The user's role at the time the token was issued.
    pub role: UserRole,
    /// Email address (convenience field from the token claims).
    pub email: String,
}

impl RequestContext {
    pub fn new(user_id: Uuid, role: UserRole, email: String) -> Self {
        Self {
            user_id,
            role,
            email,
        }
    }

    /// Returns whether the current user is a SUPER_ADMIN.
    pub fn is_super_admin(&self) -> bool {
        self.role.is_super_admin()
    }

    /// Returns whether the current user is ADMIN or above.
    pub fn is_admin_or_above(&self) -> bool {
        self.role.is_admin_or_above()
    }
}

impl From<Claims> for RequestContext {
    fn from(claims: Claims) -> Self {
        Self::new(claims.sub, claims.role, claims.email)
    }
}

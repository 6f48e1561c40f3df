//! Per-operation authorization policy.
//!
//! Combines the role hierarchy with target-role restrictions: SUPER_ADMIN
//! may manage any account, ADMIN only STAFF accounts, STAFF none.

use roombook_core::error::AppError;
use roombook_entity::user::UserRole;

/// Evaluates authorization policy for privileged operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthorizationGate;

impl AuthorizationGate {
    pub fn new() -> Self {
        Self
    }

    /// Requires the caller's role to satisfy `required` under the
    /// SUPER_ADMIN > ADMIN > STAFF hierarchy.
    pub fn require_at_least(&self, caller: UserRole, required: UserRole) -> Result<(), AppError> {
        if caller.satisfies(required) {
            Ok(())
        } else {
            Err(AppError::forbidden(format!(
                "Requires {required} privileges or above"
            )))
        }
    }

    /// Requires the caller to be SUPER_ADMIN.
    pub fn require_super_admin(&self, caller: UserRole) -> Result<(), AppError> {
        self.require_at_least(caller, UserRole::SuperAdmin)
    }

    /// Checks whether `caller` may manage (suspend, reset, update) an
    /// account with `target` role.
    ///
    /// SUPER_ADMIN may manage any account. ADMIN may only manage STAFF
    /// accounts. STAFF may manage none.
    pub fn require_can_manage(&self, caller: UserRole, target: UserRole) -> Result<(), AppError> {
        match caller {
            UserRole::SuperAdmin => Ok(()),
            UserRole::Admin if target == UserRole::Staff => Ok(()),
            UserRole::Admin => Err(AppError::forbidden(
                "Admins may only manage staff accounts",
            )),
            UserRole::Staff => Err(AppError::forbidden(
                "Requires ADMIN privileges or above",
            )),
        }
    }

    /// Returns the implicit role restriction applied to user listings.
    ///
    /// ADMIN callers only see STAFF accounts; SUPER_ADMIN sees everyone.
    /// The filter is ANDed with any explicit role filter the caller
    /// supplies.
    pub fn visible_role_filter(&self, caller: UserRole) -> Option<UserRole> {
        match caller {
            UserRole::SuperAdmin => None,
            _ => Some(UserRole::Staff),
        }
    }
}

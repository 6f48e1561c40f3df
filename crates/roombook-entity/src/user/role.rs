//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available in the authorization system.
///
/// Roles form a total order: SUPER_ADMIN > ADMIN > STAFF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    /// Full system administrator. Manages all accounts and configuration.
    SuperAdmin,
    /// Can manage STAFF accounts and bookings, but not peers or superiors.
    Admin,
    /// Regular user: browses rooms and manages their own bookings.
    Staff,
}

impl UserRole {
    /// Return the privilege level (higher = more privileged).
    pub fn privilege_level(&self) -> u8 {
        match self {
            Self::SuperAdmin => 3,
            Self::Admin => 2,
            Self::Staff => 1,
        }
    }

    /// Check if this role has at least the given role's privileges.
    pub fn satisfies(&self, required: UserRole) -> bool {
        self.privilege_level() >= required.privilege_level()
    }

    /// Check if this role is the super administrator.
    pub fn is_super_admin(&self) -> bool {
        matches!(self, Self::SuperAdmin)
    }

    /// Check if this role is admin or higher.
    pub fn is_admin_or_above(&self) -> bool {
        self.satisfies(Self::Admin)
    }

    /// Return the role as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SuperAdmin => "SUPER_ADMIN",
            Self::Admin => "ADMIN",
            Self::Staff => "STAFF",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = roombook_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SUPER_ADMIN" => Ok(Self::SuperAdmin),
            "ADMIN" => Ok(Self::Admin),
            "STAFF" => Ok(Self::Staff),
            _ => Err(roombook_core::AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: SUPER_ADMIN, ADMIN, STAFF"
            ))),
        }
    }
}

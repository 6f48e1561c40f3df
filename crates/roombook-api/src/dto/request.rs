//! Request DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use roombook_entity::user::UserRole;

/// POST /api/auth/signin body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInRequest {
    /// Login email.
    pub email: String,
    /// Plaintext password.
    pub password: String,
}

/// POST /api/users body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    /// Display name.
    pub name: String,
    /// Email (unique).
    pub email: String,
    /// Initial password; omitted means role-specific default.
    #[serde(default)]
    pub password: Option<String>,
    /// Role assignment.
    pub role: UserRole,
}

/// PUT /api/users/{id} body. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<UserRole>,
    #[serde(default)]
    pub is_suspended: Option<bool>,
}

/// PUT /api/users/{id}/suspend body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuspendRequest {
    /// New suspension state.
    pub is_suspended: bool,
}

/// PUT /api/users/{id}/password-reset body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsumeResetRequest {
    /// The opaque reset token value.
    pub token: String,
    /// The new plaintext password.
    pub new_password: String,
}

/// GET /api/users query parameters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserListQuery {
    #[serde(default)]
    pub role: Option<UserRole>,
    #[serde(default)]
    pub is_suspended: Option<bool>,
}

/// POST /api/bookings body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    /// The room to reserve.
    pub room_id: Uuid,
    /// Reservation start.
    pub start_time: chrono::DateTime<chrono::Utc>,
    /// Reservation end.
    pub end_time: chrono::DateTime<chrono::Utc>,
    /// Requested equipment as a JSON array string.
    #[serde(default)]
    pub equipment: Option<String>,
}

/// GET /api/history query parameters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryQuery {
    /// Restrict to bookings starting on this day (UTC).
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Restrict to a single room.
    #[serde(default)]
    pub room_id: Option<Uuid>,
}

/// DELETE /api/history query parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CancelBookingQuery {
    /// The booking to cancel.
    pub id: Uuid,
}

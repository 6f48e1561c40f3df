//! Booking entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::BookingStatus;

/// A reservation of one room by one user for a time window.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
    /// Unique booking identifier.
    pub id: Uuid,
    /// The booked room.
    pub room_id: Uuid,
    /// The user who made the booking.
    pub user_id: Uuid,
    /// Reservation start.
    pub start_time: DateTime<Utc>,
    /// Reservation end.
    pub end_time: DateTime<Utc>,
    /// Approval state.
    pub status: BookingStatus,
    /// Requested equipment stored as a JSON array string.
    pub equipment: String,
    /// When the booking was created.
    pub created_at: DateTime<Utc>,
    /// When the booking was last updated.
    pub updated_at: DateTime<Utc>,
}

/// A booking joined with its room name, as shown in history listings.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BookingWithRoom {
    /// Booking identifier.
    pub id: Uuid,
    /// Name of the booked room.
    pub room_name: String,
    /// Reservation start.
    pub start_time: DateTime<Utc>,
    /// Reservation end.
    pub end_time: DateTime<Utc>,
    /// Approval state.
    pub status: BookingStatus,
}

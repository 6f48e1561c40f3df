//! Meeting-room entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A bookable meeting room.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Room {
    /// Unique room identifier.
    pub id: Uuid,
    /// Room name.
    pub name: String,
    /// Seating capacity.
    pub capacity: i32,
    /// Physical location (building / floor).
    pub location: String,
    /// Feature list stored as a JSON array string (projector, whiteboard...).
    pub features: String,
    /// Whether bookings for this room are approved automatically.
    pub auto_approve: bool,
    /// If set and in the future, the room is unavailable until then.
    pub suspended_until: Option<DateTime<Utc>>,
    /// When the room was created.
    pub created_at: DateTime<Utc>,
    /// When the room was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Room {
    /// A room is available unless suspended into the future.
    pub fn is_available(&self, now: DateTime<Utc>) -> bool {
        match self.suspended_until {
            Some(until) => until <= now,
            None => true,
        }
    }
}

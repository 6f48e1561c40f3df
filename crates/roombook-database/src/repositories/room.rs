//! Room repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use roombook_core::error::{AppError, ErrorKind};
use roombook_core::result::AppResult;
use roombook_entity::room::Room;

/// Repository for meeting-room queries.
#[derive(Debug, Clone)]
pub struct RoomRepository {
    pool: PgPool,
}

impl RoomRepository {
    /// Create a new room repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a room by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Room>> {
        sqlx::query_as::<_, Room>("SELECT * FROM rooms WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find room by id", e))
    }

    /// List rooms currently available for booking.
    ///
    /// A room is available when it has no suspension or its suspension
    /// window has already passed.
    pub async fn list_available(&self) -> AppResult<Vec<Room>> {
        sqlx::query_as::<_, Room>(
            "SELECT * FROM rooms \
             WHERE suspended_until IS NULL OR suspended_until <= NOW() \
             ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list available rooms", e))
    }
}

//! Booking repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use roombook_core::error::{AppError, ErrorKind};
use roombook_core::result::AppResult;
use roombook_entity::booking::{Booking, BookingStatus, BookingWithRoom};

/// Filters applied when listing a user's booking history. All present
/// filters are ANDed.
#[derive(Debug, Clone, Default)]
pub struct HistoryFilter {
    /// Restrict to bookings starting on this calendar day (UTC).
    pub date: Option<chrono::NaiveDate>,
    /// Restrict to a single room.
    pub room_id: Option<Uuid>,
}

/// Repository for booking CRUD and history queries.
#[derive(Debug, Clone)]
pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    /// Create a new booking repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a booking by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Booking>> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find booking by id", e)
            })
    }

    /// Create a booking with the given initial status.
    pub async fn create(
        &self,
        room_id: Uuid,
        user_id: Uuid,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        status: BookingStatus,
        equipment: &str,
    ) -> AppResult<Booking> {
        sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings (room_id, user_id, start_time, end_time, status, equipment) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING *",
        )
        .bind(room_id)
        .bind(user_id)
        .bind(start_time)
        .bind(end_time)
        .bind(status)
        .bind(equipment)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create booking", e))
    }

    /// List one user's bookings joined with room names, newest first.
    pub async fn list_for_user(
        &self,
        user_id: Uuid,
        filter: &HistoryFilter,
    ) -> AppResult<Vec<BookingWithRoom>> {
        sqlx::query_as::<_, BookingWithRoom>(
            "SELECT b.id, r.name AS room_name, b.start_time, b.end_time, b.status \
             FROM bookings b \
             JOIN rooms r ON r.id = b.room_id \
             WHERE b.user_id = $1 \
               AND ($2::date IS NULL OR (b.start_time AT TIME ZONE 'UTC')::date = $2) \
               AND ($3::uuid IS NULL OR b.room_id = $3) \
             ORDER BY b.start_time DESC",
        )
        .bind(user_id)
        .bind(filter.date)
        .bind(filter.room_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list bookings", e))
    }

    /// Delete a booking by ID.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete booking", e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}

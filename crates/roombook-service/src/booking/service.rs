//! Booking creation, personal history, and ownership-checked cancellation.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use roombook_core::error::AppError;
use roombook_database::repositories::booking::{BookingRepository, HistoryFilter};
use roombook_database::repositories::room::RoomRepository;
use roombook_entity::booking::{Booking, BookingStatus, BookingWithRoom};

use crate::context::RequestContext;

/// Input for creating a booking.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CreateBookingInput {
    /// The room to reserve.
    pub room_id: Uuid,
    /// Reservation start.
    pub start_time: DateTime<Utc>,
    /// Reservation end.
    pub end_time: DateTime<Utc>,
    /// Requested equipment as a JSON array string.
    #[serde(default)]
    pub equipment: Option<String>,
}

/// Handles booking operations for authenticated users.
#[derive(Debug, Clone)]
pub struct BookingService {
    booking_repo: Arc<BookingRepository>,
    room_repo: Arc<RoomRepository>,
}

impl BookingService {
    pub fn new(booking_repo: Arc<BookingRepository>, room_repo: Arc<RoomRepository>) -> Self {
        Self {
            booking_repo,
            room_repo,
        }
    }

    /// Creates a booking for the calling user.
    ///
    /// The initial status depends on the room: auto-approve rooms yield
    /// APPROVED bookings, all others start PENDING. Suspended rooms cannot
    /// be booked.
    pub async fn create_booking(
        &self,
        ctx: &RequestContext,
        input: CreateBookingInput,
    ) -> Result<Booking, AppError> {
        if input.end_time <= input.start_time {
            return Err(AppError::validation("End time must be after start time"));
        }

        let room = self
            .room_repo
            .find_by_id(input.room_id)
            .await?
            .ok_or_else(|| AppError::not_found("Room not found"))?;

        if !room.is_available(Utc::now()) {
            return Err(AppError::validation("Room is currently unavailable"));
        }

        let status = if room.auto_approve {
            BookingStatus::Approved
        } else {
            BookingStatus::Pending
        };

        let booking = self
            .booking_repo
            .create(
                room.id,
                ctx.user_id,
                input.start_time,
                input.end_time,
                status,
                input.equipment.as_deref().unwrap_or("[]"),
            )
            .await?;

        info!(
            user_id = %ctx.user_id,
            booking_id = %booking.id,
            room_id = %room.id,
            status = %booking.status,
            "Booking created"
        );

        Ok(booking)
    }

    /// Lists the calling user's bookings, optionally filtered by day and
    /// room. Users only ever see their own history.
    pub async fn history(
        &self,
        ctx: &RequestContext,
        filter: HistoryFilter,
    ) -> Result<Vec<BookingWithRoom>, AppError> {
        self.booking_repo.list_for_user(ctx.user_id, &filter).await
    }

    /// Cancels a booking.
    ///
    /// Ordinary users may only cancel their own bookings; ADMIN and above
    /// may cancel anyone's. A booking belonging to someone else is reported
    /// as not found, so callers cannot distinguish "not yours" from "does
    /// not exist".
    pub async fn cancel_booking(
        &self,
        ctx: &RequestContext,
        booking_id: Uuid,
    ) -> Result<(), AppError> {
        let booking = self
            .booking_repo
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| AppError::not_found("Booking not found"))?;

        if booking.user_id != ctx.user_id && !ctx.role.is_admin_or_above() {
            return Err(AppError::not_found("Booking not found"));
        }

        self.booking_repo.delete(booking_id).await?;

        info!(user_id = %ctx.user_id, booking_id = %booking_id, "Booking cancelled");
        Ok(())
    }
}

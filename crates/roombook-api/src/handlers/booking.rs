//! Booking handlers: creation, history, and cancellation.

use axum::Json;
use axum::extract::{Query, State};

use roombook_database::repositories::booking::HistoryFilter;
use roombook_entity::booking::{Booking, BookingWithRoom};
use roombook_service::booking::CreateBookingInput;

use crate::dto::request::{CancelBookingQuery, CreateBookingRequest, HistoryQuery};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/bookings
pub async fn create_booking(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateBookingRequest>,
) -> Result<Json<ApiResponse<Booking>>, ApiError> {
    let booking = state
        .booking_service
        .create_booking(
            &auth,
            CreateBookingInput {
                room_id: req.room_id,
                start_time: req.start_time,
                end_time: req.end_time,
                equipment: req.equipment,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(booking)))
}

/// GET /api/history
pub async fn history(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<ApiResponse<Vec<BookingWithRoom>>>, ApiError> {
    let bookings = state
        .booking_service
        .history(
            &auth,
            HistoryFilter {
                date: query.date,
                room_id: query.room_id,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(bookings)))
}

/// DELETE /api/history?id={booking_id}
pub async fn cancel_booking(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<CancelBookingQuery>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.booking_service.cancel_booking(&auth, query.id).await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Booking cancelled".to_string(),
    })))
}

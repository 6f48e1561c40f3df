//! Room browsing handlers.

use axum::Json;
use axum::extract::State;

use roombook_entity::room::Room;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/rooms
pub async fn list_rooms(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<Room>>>, ApiError> {
    let rooms = state.room_service.list_available().await?;
    Ok(Json(ApiResponse::ok(rooms)))
}

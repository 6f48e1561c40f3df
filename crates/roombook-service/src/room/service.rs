//! Room browsing for authenticated users.

use std::sync::Arc;

use roombook_core::error::AppError;
use roombook_database::repositories::room::RoomRepository;
use roombook_entity::room::Room;

/// Handles room listing.
#[derive(Debug, Clone)]
pub struct RoomService {
    room_repo: Arc<RoomRepository>,
}

impl RoomService {
    pub fn new(room_repo: Arc<RoomRepository>) -> Self {
        Self { room_repo }
    }

    /// Lists rooms currently open for booking. Any authenticated user may
    /// browse; suspended rooms are filtered out at the query level.
    pub async fn list_available(&self) -> Result<Vec<Room>, AppError> {
        self.room_repo.list_available().await
    }
}

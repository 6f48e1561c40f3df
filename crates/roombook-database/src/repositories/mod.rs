//! Repository implementations for all Roombook entities.

pub mod booking;
pub mod reset_token;
pub mod room;
pub mod user;

pub use booking::BookingRepository;
pub use reset_token::ResetTokenRepository;
pub use room::RoomRepository;
pub use user::{UserFilter, UserRepository};

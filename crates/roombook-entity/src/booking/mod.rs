//! Booking entities.

pub mod model;
pub mod status;

pub use model::{Booking, BookingWithRoom};
pub use status::BookingStatus;

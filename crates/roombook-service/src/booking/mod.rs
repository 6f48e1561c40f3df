//! Booking creation, history, and cancellation.

pub mod service;

pub use service::{BookingService, CreateBookingInput};

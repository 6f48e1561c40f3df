//! Room browsing.

pub mod service;

pub use service::RoomService;

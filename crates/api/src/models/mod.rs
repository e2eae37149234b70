//! Domain and wire types for the api crate.
//!
//! Stored documents and JSON payloads share a camelCase wire format, matching
//! the persisted collection layout.

pub mod booking;
pub mod train;
pub mod user;

pub use booking::{Booking, CreateBooking};
pub use train::{CreateTrain, Train};
pub use user::{User, UserRecord};

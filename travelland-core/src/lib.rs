pub mod models;
pub mod repository;
pub mod search;
pub mod booking;
pub mod seed;

pub use models::{Booking, BookingId, NewBooking, NewTrip, Trip, TripId};
pub use repository::{BookingRepository, TripRepository};
pub use search::{list_bookings, list_offerings};
pub use booking::{book, BookingForm, BookingOutcome};
pub use seed::{sample_trips, seed_sample_trips};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Invalid identifier: {0}")]
    InvalidId(String),
    #[error("Store error: {0}")]
    StoreError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;

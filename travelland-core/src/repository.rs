use async_trait::async_trait;

use crate::models::{Booking, BookingId, NewBooking, NewTrip, Trip, TripId};
use crate::CoreResult;

/// Access to the `trips` collection.
#[async_trait]
pub trait TripRepository: Send + Sync {
    async fn count_trips(&self) -> CoreResult<u64>;

    async fn insert_trips(&self, trips: &[NewTrip]) -> CoreResult<Vec<TripId>>;

    /// Trips in insertion order. When `destination` is given, only trips whose
    /// destination contains it, ignoring case.
    async fn find_trips(&self, destination: Option<&str>) -> CoreResult<Vec<Trip>>;

    async fn get_trip(&self, id: TripId) -> CoreResult<Option<Trip>>;
}

/// Access to the `bookings` collection. Bookings are append-only.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn insert_booking(&self, booking: &NewBooking) -> CoreResult<BookingId>;

    async fn list_bookings(&self) -> CoreResult<Vec<Booking>>;
}

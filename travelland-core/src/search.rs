use crate::models::{Booking, Trip};
use crate::repository::{BookingRepository, TripRepository};
use crate::CoreResult;

/// An empty filter means "no filter".
pub fn normalize_filter(filter: Option<&str>) -> Option<&str> {
    filter.filter(|f| !f.is_empty())
}

/// Case-insensitive substring match on a destination.
pub fn destination_matches(destination: &str, needle: &str) -> bool {
    destination.to_lowercase().contains(&needle.to_lowercase())
}

/// Lists trips, optionally narrowed to destinations containing `filter`.
/// Nothing matching is an empty list, not an error.
pub async fn list_offerings(
    trips: &dyn TripRepository,
    filter: Option<&str>,
) -> CoreResult<Vec<Trip>> {
    let filter = normalize_filter(filter);
    let results = trips.find_trips(filter).await?;
    tracing::debug!("Trip search {:?} returned {} results", filter, results.len());
    Ok(results)
}

pub async fn list_bookings(bookings: &dyn BookingRepository) -> CoreResult<Vec<Booking>> {
    bookings.list_bookings().await
}

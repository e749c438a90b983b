use serde::Deserialize;
use tracing::info;
use travelland_shared::Masked;

use crate::models::{Booking, NewBooking, TripId};
use crate::repository::{BookingRepository, TripRepository};
use crate::{CoreError, CoreResult};

pub const MISSING_FIELDS_MESSAGE: &str = "Please fill out all fields before booking.";

/// Fields submitted from the booking page. Missing fields deserialize as empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingForm {
    #[serde(default)]
    pub trip_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl BookingForm {
    /// Presence check only; email format and name content are not inspected.
    pub fn validate(&self) -> CoreResult<()> {
        if self.trip_id.is_empty() || self.name.is_empty() || self.email.is_empty() {
            return Err(CoreError::ValidationError(MISSING_FIELDS_MESSAGE.to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BookingOutcome {
    Confirmed(Booking),
    TripNotFound,
}

/// Books the trip identified by `trip_id` for the given requester.
///
/// A malformed `trip_id` is rejected with `CoreError::InvalidId` before the
/// store is touched. An unknown trip yields `TripNotFound` and writes nothing.
pub async fn book(
    trips: &dyn TripRepository,
    bookings: &dyn BookingRepository,
    name: &str,
    email: &str,
    trip_id: &str,
) -> CoreResult<BookingOutcome> {
    let trip_id: TripId = trip_id.parse()?;

    let Some(trip) = trips.get_trip(trip_id).await? else {
        info!("Booking rejected, trip {} not found", trip_id);
        return Ok(BookingOutcome::TripNotFound);
    };

    let booking = NewBooking::snapshot(&trip, name, email);
    let booking_id = bookings.insert_booking(&booking).await?;

    info!(
        "Booking confirmed: {} for {} ({})",
        booking_id,
        Masked(email),
        trip.destination
    );

    Ok(BookingOutcome::Confirmed(Booking::from_document(booking_id, booking)))
}

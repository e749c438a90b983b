use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::CoreError;

/// Store-generated identifier of a trip. Opaque outside the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TripId(Uuid);

/// Store-generated identifier of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingId(Uuid);

macro_rules! document_id {
    ($name:ident) => {
        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn from_uuid(id: Uuid) -> Self {
                Self(id)
            }

            pub fn as_uuid(&self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s)
                    .map(Self)
                    .map_err(|_| CoreError::InvalidId(s.to_string()))
            }
        }
    };
}

document_id!(TripId);
document_id!(BookingId);

/// Trip document as stored in the `trips` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTrip {
    pub destination: String,
    pub price: f64,
    /// Free text, never parsed as a calendar date.
    pub date: String,
    pub description: String,
}

/// A travel offering together with its store identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub id: TripId,
    pub destination: String,
    pub price: f64,
    pub date: String,
    pub description: String,
}

impl Trip {
    pub fn from_document(id: TripId, doc: NewTrip) -> Self {
        Self {
            id,
            destination: doc.destination,
            price: doc.price,
            date: doc.date,
            description: doc.description,
        }
    }

    /// Label used by the booking form, e.g. `Paris - $1200 (2025-12-01)`.
    pub fn option_label(&self) -> String {
        format!("{} - ${} ({})", self.destination, self.price, self.date)
    }
}

/// Booking document as stored in the `bookings` collection.
///
/// Destination, price and date are copied from the trip when the booking is
/// made and are never refreshed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBooking {
    pub name: String,
    pub email: String,
    pub trip_id: String,
    pub destination: String,
    pub price: f64,
    pub date: String,
}

impl NewBooking {
    pub fn snapshot(trip: &Trip, name: &str, email: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            trip_id: trip.id.to_string(),
            destination: trip.destination.clone(),
            price: trip.price,
            date: trip.date.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    pub name: String,
    pub email: String,
    pub trip_id: String,
    pub destination: String,
    pub price: f64,
    pub date: String,
}

impl Booking {
    pub fn from_document(id: BookingId, doc: NewBooking) -> Self {
        Self {
            id,
            name: doc.name,
            email: doc.email,
            trip_id: doc.trip_id,
            destination: doc.destination,
            price: doc.price,
            date: doc.date,
        }
    }
}

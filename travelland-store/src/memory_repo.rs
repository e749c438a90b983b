use async_trait::async_trait;
use tokio::sync::RwLock;

use travelland_core::search::destination_matches;
use travelland_core::{
    Booking, BookingId, BookingRepository, CoreResult, NewBooking, NewTrip, Trip, TripId,
    TripRepository,
};

/// In-process `trips` collection. Nothing survives a restart.
#[derive(Default)]
pub struct MemoryTripRepository {
    trips: RwLock<Vec<Trip>>,
}

impl MemoryTripRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TripRepository for MemoryTripRepository {
    async fn count_trips(&self) -> CoreResult<u64> {
        Ok(self.trips.read().await.len() as u64)
    }

    async fn insert_trips(&self, trips: &[NewTrip]) -> CoreResult<Vec<TripId>> {
        let mut stored = self.trips.write().await;
        let ids = trips
            .iter()
            .map(|doc| {
                let id = TripId::new();
                stored.push(Trip::from_document(id, doc.clone()));
                id
            })
            .collect();
        Ok(ids)
    }

    async fn find_trips(&self, destination: Option<&str>) -> CoreResult<Vec<Trip>> {
        let trips = self.trips.read().await;
        Ok(trips
            .iter()
            .filter(|t| destination.map_or(true, |d| destination_matches(&t.destination, d)))
            .cloned()
            .collect())
    }

    async fn get_trip(&self, id: TripId) -> CoreResult<Option<Trip>> {
        Ok(self.trips.read().await.iter().find(|t| t.id == id).cloned())
    }
}

/// In-process `bookings` collection.
#[derive(Default)]
pub struct MemoryBookingRepository {
    bookings: RwLock<Vec<Booking>>,
}

impl MemoryBookingRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookingRepository for MemoryBookingRepository {
    async fn insert_booking(&self, booking: &NewBooking) -> CoreResult<BookingId> {
        let id = BookingId::new();
        self.bookings
            .write()
            .await
            .push(Booking::from_document(id, booking.clone()));
        Ok(id)
    }

    async fn list_bookings(&self) -> CoreResult<Vec<Booking>> {
        Ok(self.bookings.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use travelland_core::sample_trips;

    #[tokio::test]
    async fn test_insert_preserves_order() {
        let repo = MemoryTripRepository::new();
        let ids = repo.insert_trips(&sample_trips()).await.unwrap();
        assert_eq!(ids.len(), 4);

        let all = repo.find_trips(None).await.unwrap();
        let listed: Vec<_> = all.iter().map(|t| t.id).collect();
        assert_eq!(listed, ids);
    }

    #[tokio::test]
    async fn test_get_trip_by_id() {
        let repo = MemoryTripRepository::new();
        let ids = repo.insert_trips(&sample_trips()).await.unwrap();

        let bali = repo.get_trip(ids[2]).await.unwrap().unwrap();
        assert_eq!(bali.destination, "Bali");
        assert!(repo.get_trip(TripId::new()).await.unwrap().is_none());
    }
}

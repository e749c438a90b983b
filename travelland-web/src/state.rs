use std::sync::Arc;
use travelland_core::{BookingRepository, TripRepository};
use travelland_store::Store;

#[derive(Clone)]
pub struct AppState {
    pub trips: Arc<dyn TripRepository>,
    pub bookings: Arc<dyn BookingRepository>,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        Self {
            trips: store.trips,
            bookings: store.bookings,
        }
    }
}

pub mod app_config;
pub mod database;
pub mod document_repo;
pub mod memory_repo;

use std::sync::Arc;

use travelland_core::{BookingRepository, CoreError, CoreResult, TripRepository};
use tracing::info;

pub use database::DbClient;
pub use document_repo::{PostgresBookingRepository, PostgresTripRepository};
pub use memory_repo::{MemoryBookingRepository, MemoryTripRepository};

/// Handles to both collections, built once at startup and shared.
#[derive(Clone)]
pub struct Store {
    pub trips: Arc<dyn TripRepository>,
    pub bookings: Arc<dyn BookingRepository>,
}

impl Store {
    /// Opens the backend named by `config.url`: `memory://` for the
    /// in-process store, anything else is a Postgres connection string.
    pub async fn connect(config: &app_config::DatabaseConfig) -> CoreResult<Self> {
        if config.is_memory() {
            info!("Using in-memory document store");
            return Ok(Self::in_memory());
        }

        let db = DbClient::new(config)
            .await
            .map_err(|e| CoreError::StoreError(e.to_string()))?;
        db.migrate()
            .await
            .map_err(|e| CoreError::StoreError(e.to_string()))?;

        Ok(Self {
            trips: Arc::new(PostgresTripRepository::new(db.pool.clone())),
            bookings: Arc::new(PostgresBookingRepository::new(db.pool)),
        })
    }

    pub fn in_memory() -> Self {
        Self {
            trips: Arc::new(MemoryTripRepository::new()),
            bookings: Arc::new(MemoryBookingRepository::new()),
        }
    }
}

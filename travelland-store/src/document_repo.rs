use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use travelland_core::{
    Booking, BookingId, BookingRepository, CoreError, CoreResult, NewBooking, NewTrip, Trip,
    TripId, TripRepository,
};

fn store_error(e: impl std::fmt::Display) -> CoreError {
    CoreError::StoreError(e.to_string())
}

/// Builds an ILIKE pattern matching `needle` anywhere, with LIKE wildcards
/// in the needle treated literally.
pub fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// `trips` collection backed by a JSONB table.
pub struct PostgresTripRepository {
    pool: PgPool,
}

impl PostgresTripRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TripRepository for PostgresTripRepository {
    async fn count_trips(&self) -> CoreResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM trips")
            .fetch_one(&self.pool)
            .await
            .map_err(store_error)?;

        Ok(count as u64)
    }

    async fn insert_trips(&self, trips: &[NewTrip]) -> CoreResult<Vec<TripId>> {
        let mut tx = self.pool.begin().await.map_err(store_error)?;
        let mut ids = Vec::with_capacity(trips.len());

        for trip in trips {
            let id = TripId::new();
            sqlx::query("INSERT INTO trips (id, doc) VALUES ($1, $2)")
                .bind(id.as_uuid())
                .bind(Json(trip))
                .execute(&mut *tx)
                .await
                .map_err(store_error)?;
            ids.push(id);
        }

        tx.commit().await.map_err(store_error)?;
        Ok(ids)
    }

    async fn find_trips(&self, destination: Option<&str>) -> CoreResult<Vec<Trip>> {
        let rows: Vec<(Uuid, Json<NewTrip>)> = match destination {
            Some(needle) => {
                sqlx::query_as::<_, (Uuid, Json<NewTrip>)>(
                    "SELECT id, doc FROM trips WHERE doc->>'destination' ILIKE $1 ORDER BY seq",
                )
                .bind(contains_pattern(needle))
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, (Uuid, Json<NewTrip>)>("SELECT id, doc FROM trips ORDER BY seq")
                    .fetch_all(&self.pool)
                    .await
            }
        }
        .map_err(store_error)?;

        Ok(rows
            .into_iter()
            .map(|(id, Json(doc))| Trip::from_document(TripId::from_uuid(id), doc))
            .collect())
    }

    async fn get_trip(&self, id: TripId) -> CoreResult<Option<Trip>> {
        let row: Option<(Uuid, Json<NewTrip>)> =
            sqlx::query_as("SELECT id, doc FROM trips WHERE id = $1")
                .bind(id.as_uuid())
                .fetch_optional(&self.pool)
                .await
                .map_err(store_error)?;

        Ok(row.map(|(id, Json(doc))| Trip::from_document(TripId::from_uuid(id), doc)))
    }
}

/// `bookings` collection backed by a JSONB table.
pub struct PostgresBookingRepository {
    pool: PgPool,
}

impl PostgresBookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for PostgresBookingRepository {
    async fn insert_booking(&self, booking: &NewBooking) -> CoreResult<BookingId> {
        let id = BookingId::new();
        sqlx::query("INSERT INTO bookings (id, doc) VALUES ($1, $2)")
            .bind(id.as_uuid())
            .bind(Json(booking))
            .execute(&self.pool)
            .await
            .map_err(store_error)?;

        Ok(id)
    }

    async fn list_bookings(&self) -> CoreResult<Vec<Booking>> {
        let rows: Vec<(Uuid, Json<NewBooking>)> =
            sqlx::query_as("SELECT id, doc FROM bookings ORDER BY seq")
                .fetch_all(&self.pool)
                .await
                .map_err(store_error)?;

        Ok(rows
            .into_iter()
            .map(|(id, Json(doc))| Booking::from_document(BookingId::from_uuid(id), doc))
            .collect())
    }
}

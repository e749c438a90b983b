use tracing::info;

use crate::models::NewTrip;
use crate::repository::TripRepository;
use crate::CoreResult;

fn trip(destination: &str, price: f64, date: &str, description: &str) -> NewTrip {
    NewTrip {
        destination: destination.to_string(),
        price,
        date: date.to_string(),
        description: description.to_string(),
    }
}

/// The fixed catalogue inserted into an empty `trips` collection.
pub fn sample_trips() -> Vec<NewTrip> {
    vec![
        trip(
            "Paris",
            1200.0,
            "2025-12-01",
            "Experience art, romance, and culture in the City of Lights.",
        ),
        trip(
            "Tokyo",
            1500.0,
            "2025-12-15",
            "Discover modern Japan blended with ancient traditions.",
        ),
        trip(
            "Bali",
            950.0,
            "2026-01-10",
            "Relax on sandy beaches and explore tropical jungles.",
        ),
        trip(
            "New York",
            1100.0,
            "2026-02-05",
            "Enjoy the energy of the Big Apple with endless attractions.",
        ),
    ]
}

/// Inserts the sample trips if the collection is empty and returns how many
/// were written. Check-then-insert, so two processes starting together
/// against the same empty store can both seed.
pub async fn seed_sample_trips(trips: &dyn TripRepository) -> CoreResult<usize> {
    if trips.count_trips().await? > 0 {
        return Ok(0);
    }

    let inserted = trips.insert_trips(&sample_trips()).await?;
    info!("Sample trips added to database ({} trips)", inserted.len());
    Ok(inserted.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalogue() {
        let trips = sample_trips();
        let destinations: Vec<_> = trips.iter().map(|t| t.destination.as_str()).collect();
        assert_eq!(destinations, vec!["Paris", "Tokyo", "Bali", "New York"]);
        assert_eq!(trips[0].price, 1200.0);
        assert_eq!(trips[2].date, "2026-01-10");
    }
}

use pretty_assertions::assert_eq;
use travelland_core::{
    book, list_bookings, list_offerings, seed_sample_trips, BookingOutcome, CoreError, NewTrip,
    TripId, TripRepository,
};
use travelland_store::Store;

fn trip(destination: &str, price: f64) -> NewTrip {
    NewTrip {
        destination: destination.to_string(),
        price,
        date: "2025-12-01".to_string(),
        description: format!("Visit {}", destination),
    }
}

async fn store_with(trips: &[NewTrip]) -> (Store, Vec<TripId>) {
    let store = Store::in_memory();
    let ids = store.trips.insert_trips(trips).await.unwrap();
    (store, ids)
}

#[tokio::test]
async fn test_filter_is_case_insensitive_substring() {
    let (store, _) = store_with(&[trip("Paris", 1200.0), trip("Tokyo", 1500.0)]).await;

    let found = list_offerings(store.trips.as_ref(), Some("to")).await.unwrap();
    let names: Vec<_> = found.iter().map(|t| t.destination.as_str()).collect();
    assert_eq!(names, vec!["Tokyo"]);

    let found = list_offerings(store.trips.as_ref(), Some("PAR")).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].destination, "Paris");
}

#[tokio::test]
async fn test_no_filter_returns_everything() {
    let (store, _) = store_with(&[trip("Paris", 1200.0), trip("Tokyo", 1500.0)]).await;

    assert_eq!(list_offerings(store.trips.as_ref(), None).await.unwrap().len(), 2);
    assert_eq!(list_offerings(store.trips.as_ref(), Some("")).await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_no_match_is_empty_not_error() {
    let (store, _) = store_with(&[trip("Paris", 1200.0)]).await;

    let found = list_offerings(store.trips.as_ref(), Some("Lisbon")).await.unwrap();
    assert!(found.is_empty());
}

#[tokio::test]
async fn test_filter_matches_exact_subset() {
    let (store, _) = store_with(&[
        trip("Paris", 1200.0),
        trip("Tokyo", 1500.0),
        trip("Bali", 950.0),
        trip("New York", 1100.0),
    ])
    .await;
    let all = list_offerings(store.trips.as_ref(), None).await.unwrap();

    for needle in ["a", "o", "Y", "new", "x", " "] {
        let found = list_offerings(store.trips.as_ref(), Some(needle)).await.unwrap();
        let expected: Vec<_> = all
            .iter()
            .filter(|t| t.destination.to_lowercase().contains(&needle.to_lowercase()))
            .cloned()
            .collect();
        assert_eq!(found, expected, "filter {:?}", needle);
    }
}

#[tokio::test]
async fn test_booking_snapshots_trip() {
    let (store, ids) = store_with(&[trip("Paris", 1200.0), trip("Tokyo", 1500.0)]).await;
    let paris_id = ids[0].to_string();

    let outcome = book(
        store.trips.as_ref(),
        store.bookings.as_ref(),
        "Ana",
        "ana@x.com",
        &paris_id,
    )
    .await
    .unwrap();

    let BookingOutcome::Confirmed(booking) = outcome else {
        panic!("expected confirmed booking");
    };
    assert_eq!(booking.destination, "Paris");
    assert_eq!(booking.price, 1200.0);
    assert_eq!(booking.date, "2025-12-01");
    assert_eq!(booking.trip_id, paris_id);

    let bookings = list_bookings(store.bookings.as_ref()).await.unwrap();
    assert_eq!(bookings, vec![booking]);
}

#[tokio::test]
async fn test_unknown_trip_writes_nothing() {
    let (store, _) = store_with(&[trip("Paris", 1200.0)]).await;
    let missing = TripId::new().to_string();

    let outcome = book(
        store.trips.as_ref(),
        store.bookings.as_ref(),
        "Ana",
        "ana@x.com",
        &missing,
    )
    .await
    .unwrap();

    assert_eq!(outcome, BookingOutcome::TripNotFound);
    assert!(list_bookings(store.bookings.as_ref()).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_malformed_trip_id_is_rejected() {
    let (store, _) = store_with(&[trip("Paris", 1200.0)]).await;

    let err = book(
        store.trips.as_ref(),
        store.bookings.as_ref(),
        "Ana",
        "ana@x.com",
        "<nonexistent-id>",
    )
    .await
    .unwrap_err();

    assert!(matches!(err, CoreError::InvalidId(_)));
    assert!(list_bookings(store.bookings.as_ref()).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_same_trip_can_be_booked_repeatedly() {
    let (store, ids) = store_with(&[trip("Bali", 950.0)]).await;
    let bali_id = ids[0].to_string();

    for name in ["Ana", "Ben", "Ana"] {
        let outcome = book(
            store.trips.as_ref(),
            store.bookings.as_ref(),
            name,
            "x@y.z",
            &bali_id,
        )
        .await
        .unwrap();
        assert!(matches!(outcome, BookingOutcome::Confirmed(_)));
    }

    assert_eq!(list_bookings(store.bookings.as_ref()).await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_seeding_runs_once() {
    let store = Store::in_memory();

    assert_eq!(seed_sample_trips(store.trips.as_ref()).await.unwrap(), 4);
    assert_eq!(seed_sample_trips(store.trips.as_ref()).await.unwrap(), 0);
    assert_eq!(store.trips.count_trips().await.unwrap(), 4);
}

#[tokio::test]
async fn test_seeding_skips_non_empty_collection() {
    let (store, _) = store_with(&[trip("Lisbon", 800.0)]).await;

    assert_eq!(seed_sample_trips(store.trips.as_ref()).await.unwrap(), 0);
    let all = list_offerings(store.trips.as_ref(), None).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].destination, "Lisbon");
}

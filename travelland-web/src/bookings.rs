use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    routing::get,
    Form, Router,
};
use tracing::info;
use travelland_core::{book, list_offerings, BookingForm, BookingOutcome, CoreError, Trip};

use crate::error::AppError;
use crate::state::AppState;
use crate::views::{self, Notice, View};

const HEADING: &str = "Book Your Trip";

pub fn routes() -> Router<AppState> {
    Router::new().route("/book", get(booking_page).post(commit_booking))
}

fn render(trips: &[Trip], form: &BookingForm, notice: Option<(Notice, &str)>) -> Html<String> {
    if trips.is_empty() {
        return views::page(
            View::Book,
            HEADING,
            &views::notice(Notice::Warning, "No trips available!"),
        );
    }

    let mut body = views::booking_form(trips, form);
    if let Some((kind, message)) = notice {
        body.push('\n');
        body.push_str(&views::notice(kind, message));
    }
    views::page(View::Book, HEADING, &body)
}

/// GET /book
async fn booking_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let trips = list_offerings(state.trips.as_ref(), None).await?;
    Ok(render(&trips, &BookingForm::default(), None))
}

/// POST /book
async fn commit_booking(
    State(state): State<AppState>,
    Form(form): Form<BookingForm>,
) -> Result<(StatusCode, Html<String>), AppError> {
    let trips = list_offerings(state.trips.as_ref(), None).await?;
    if trips.is_empty() {
        return Ok((StatusCode::OK, render(&trips, &form, None)));
    }

    if let Err(CoreError::ValidationError(msg)) = form.validate() {
        info!("Booking form rejected: {}", msg);
        return Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            render(&trips, &form, Some((Notice::Error, msg.as_str()))),
        ));
    }

    let outcome = book(
        state.trips.as_ref(),
        state.bookings.as_ref(),
        &form.name,
        &form.email,
        &form.trip_id,
    )
    .await;

    let not_found = (Notice::Error, "Trip not found, please try again.");
    match outcome {
        Ok(BookingOutcome::Confirmed(_)) => Ok((
            StatusCode::OK,
            render(
                &trips,
                &BookingForm::default(),
                Some((Notice::Success, "Booking confirmed! Enjoy your trip!")),
            ),
        )),
        Ok(BookingOutcome::TripNotFound) => {
            Ok((StatusCode::OK, render(&trips, &form, Some(not_found))))
        }
        Err(CoreError::InvalidId(id)) => {
            info!("Booking rejected, malformed trip id {:?}", id);
            Ok((StatusCode::OK, render(&trips, &form, Some(not_found))))
        }
        Err(e) => Err(AppError::InternalServerError(e.to_string())),
    }
}

use axum::{extract::State, response::Html, routing::get, Router};
use travelland_core::list_bookings;

use crate::error::AppError;
use crate::state::AppState;
use crate::views::{self, Notice, View};

pub fn routes() -> Router<AppState> {
    Router::new().route("/admin/bookings", get(all_bookings))
}

/// GET /admin/bookings
async fn all_bookings(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let bookings = list_bookings(state.bookings.as_ref()).await?;

    let body = if bookings.is_empty() {
        views::notice(Notice::Info, "No bookings found yet.")
    } else {
        views::bookings_table(&bookings)
    };

    Ok(views::page(View::Admin, "All Bookings", &body))
}

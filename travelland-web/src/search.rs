use axum::{
    extract::{Query, State},
    response::Html,
    routing::get,
    Router,
};
use serde::Deserialize;
use travelland_core::list_offerings;

use crate::error::AppError;
use crate::state::AppState;
use crate::views::{self, Notice, View};

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Absent until the form is submitted; an empty submission lists every trip.
    pub destination: Option<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/search", get(search_trips))
}

/// GET /search
async fn search_trips(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Html<String>, AppError> {
    let mut body = views::search_form(query.destination.as_deref().unwrap_or_default());

    if let Some(destination) = query.destination.as_deref() {
        let trips = list_offerings(state.trips.as_ref(), Some(destination)).await?;
        body.push('\n');
        if trips.is_empty() {
            body.push_str(&views::notice(Notice::Warning, "No trips found!"));
        } else {
            body.push_str(&views::trips_table(&trips));
        }
    }

    Ok(views::page(View::Search, "Search Available Trips", &body))
}

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::views;

/// Failures with no dedicated user message. Expected outcomes such as a
/// missing trip or an incomplete form are rendered by the handlers.
#[derive(Debug)]
pub enum AppError {
    InternalServerError(String),
    Anyhow(anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
            }
            AppError::Anyhow(err) => {
                tracing::error!("Internal Server Error: {:#}", err);
            }
        }

        let body = format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"><title>{}</title></head>\n\
             <body>\n{}\n<p><a href=\"/search\">Back to TravelLand</a></p>\n</body>\n</html>\n",
            views::APP_TITLE,
            views::notice(views::Notice::Error, "Internal Server Error")
        );

        (StatusCode::INTERNAL_SERVER_ERROR, Html(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::Anyhow(err.into())
    }
}

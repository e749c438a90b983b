//! HTML rendering for the three menu views.

use axum::response::Html;
use std::fmt::Write;
use travelland_core::{Booking, BookingForm, Trip};

pub const APP_TITLE: &str = "TravelLand Booking App";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Search,
    Book,
    Admin,
}

impl View {
    const ALL: [View; 3] = [View::Search, View::Book, View::Admin];

    fn path(self) -> &'static str {
        match self {
            View::Search => "/search",
            View::Book => "/book",
            View::Admin => "/admin/bookings",
        }
    }

    fn label(self) -> &'static str {
        match self {
            View::Search => "Search Trips",
            View::Book => "Book a Trip",
            View::Admin => "Admin - View Bookings",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Success,
    Info,
    Warning,
    Error,
}

impl Notice {
    fn class(self) -> &'static str {
        match self {
            Notice::Success => "success",
            Notice::Info => "info",
            Notice::Warning => "warning",
            Notice::Error => "error",
        }
    }
}

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wraps `body` in the shared layout: title, sidebar menu, heading.
pub fn page(active: View, heading: &str, body: &str) -> Html<String> {
    let mut menu = String::new();
    for view in View::ALL {
        let class = if view == active { " class=\"active\"" } else { "" };
        let _ = write!(
            menu,
            "<li><a href=\"{}\"{}>{}</a></li>",
            view.path(),
            class,
            view.label()
        );
    }

    Html(format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n</head>\n<body>\n\
         <nav class=\"sidebar\"><h2>Menu</h2><ul>{menu}</ul></nav>\n\
         <main>\n<h1>Welcome to TravelLand Booking System</h1>\n<h2>{heading}</h2>\n{body}\n</main>\n\
         </body>\n</html>\n",
        title = APP_TITLE,
        menu = menu,
        heading = escape(heading),
        body = body,
    ))
}

pub fn notice(kind: Notice, message: &str) -> String {
    format!(
        "<p class=\"notice {}\">{}</p>",
        kind.class(),
        escape(message)
    )
}

fn table(headers: &[&str], rows: Vec<Vec<String>>) -> String {
    let mut html = String::from("<table>\n<thead><tr>");
    for h in headers {
        let _ = write!(html, "<th>{}</th>", h);
    }
    html.push_str("</tr></thead>\n<tbody>\n");
    for row in rows {
        html.push_str("<tr>");
        for cell in row {
            let _ = write!(html, "<td>{}</td>", escape(&cell));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</tbody>\n</table>");
    html
}

pub fn trips_table(trips: &[Trip]) -> String {
    table(
        &["_id", "destination", "price", "date", "description"],
        trips
            .iter()
            .map(|t| {
                vec![
                    t.id.to_string(),
                    t.destination.clone(),
                    t.price.to_string(),
                    t.date.clone(),
                    t.description.clone(),
                ]
            })
            .collect(),
    )
}

pub fn bookings_table(bookings: &[Booking]) -> String {
    table(
        &["name", "email", "destination", "price", "date", "trip_id"],
        bookings
            .iter()
            .map(|b| {
                vec![
                    b.name.clone(),
                    b.email.clone(),
                    b.destination.clone(),
                    b.price.to_string(),
                    b.date.clone(),
                    b.trip_id.clone(),
                ]
            })
            .collect(),
    )
}

pub fn search_form(destination: &str) -> String {
    format!(
        "<form method=\"get\" action=\"/search\">\n\
         <label>Enter destination name <input type=\"text\" name=\"destination\" value=\"{}\"></label>\n\
         <button type=\"submit\">Search</button>\n</form>",
        escape(destination)
    )
}

/// Booking form with `form` values pre-filled, used both for the first
/// render and after a rejected submission.
pub fn booking_form(trips: &[Trip], form: &BookingForm) -> String {
    let mut options = String::new();
    for trip in trips {
        let id = trip.id.to_string();
        let selected = if id == form.trip_id { " selected" } else { "" };
        let _ = write!(
            options,
            "<option value=\"{}\"{}>{}</option>",
            id,
            selected,
            escape(&trip.option_label())
        );
    }

    format!(
        "<form method=\"post\" action=\"/book\">\n\
         <label>Select a Trip <select name=\"trip_id\">{}</select></label>\n\
         <label>Full Name <input type=\"text\" name=\"name\" value=\"{}\"></label>\n\
         <label>Email Address <input type=\"text\" name=\"email\" value=\"{}\"></label>\n\
         <button type=\"submit\">Confirm Booking</button>\n</form>",
        options,
        escape(&form.name),
        escape(&form.email)
    )
}

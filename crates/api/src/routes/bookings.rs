//! Booking route handlers.
//!
//! Pass-through CRUD over the `bookings` collection.

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use ironrail_core::UserId;

use crate::db::bookings::BookingRepository;
use crate::error::AppError;
use crate::models::{Booking, CreateBooking};
use crate::state::AppState;

/// Query parameters for `GET /bookings`.
#[derive(Debug, Deserialize)]
pub struct BookingsQuery {
    /// Restrict the listing to one owner's bookings.
    #[serde(rename = "userId")]
    pub user_id: Option<UserId>,
}

/// Handle `GET /bookings`.
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<BookingsQuery>,
) -> Result<Json<Vec<Booking>>, AppError> {
    let bookings = BookingRepository::new(state.database())
        .list(query.user_id.as_ref())
        .await?;

    Ok(Json(bookings))
}

/// Handle `POST /bookings`.
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CreateBooking>,
) -> Result<(StatusCode, Json<Booking>), AppError> {
    let booking = BookingRepository::new(state.database())
        .insert(payload.into_booking())
        .await?;

    tracing::info!(
        booking_id = %booking.booking_id,
        user_id = %booking.user_id,
        "booking created"
    );

    Ok((StatusCode::CREATED, Json(booking)))
}

//! HTTP route handlers for the api server.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (pings the database)
//!
//! # Auth
//! POST /register               - Register a new customer account
//! POST /login                  - Login, returns a bearer token
//! GET  /me                     - Current user (requires bearer token)
//!
//! # Trains
//! GET  /trains                 - List all trains
//! POST /trains                 - Add a train
//!
//! # Bookings
//! GET  /bookings               - List bookings (optional ?userId= filter)
//! POST /bookings               - Create a booking
//! ```

pub mod auth;
pub mod bookings;
pub mod trains;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/me", get(auth::me))
}

/// Create the train routes router.
pub fn train_routes() -> Router<AppState> {
    Router::new().route("/", get(trains::index).post(trains::create))
}

/// Create the booking routes router.
pub fn booking_routes() -> Router<AppState> {
    Router::new().route("/", get(bookings::index).post(bookings::create))
}

/// Create all routes for the api server.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Auth routes live at the root, matching the public API contract
        .merge(auth_routes())
        // Train routes
        .nest("/trains", train_routes())
        // Booking routes
        .nest("/bookings", booking_routes())
}

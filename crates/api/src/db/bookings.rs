//! Booking repository.

use futures::TryStreamExt;
use mongodb::{Collection, Database, bson::doc};

use ironrail_core::UserId;

use super::RepositoryError;
use crate::models::Booking;

/// Name of the backing collection.
pub const COLLECTION: &str = "bookings";

/// Repository for passenger bookings.
pub struct BookingRepository {
    collection: Collection<Booking>,
}

impl BookingRepository {
    /// Create a new booking repository over the given database handle.
    #[must_use]
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(COLLECTION),
        }
    }

    /// List bookings, optionally filtered to a single owner.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self, owner: Option<&UserId>) -> Result<Vec<Booking>, RepositoryError> {
        let filter = match owner {
            Some(user_id) => doc! { "userId": user_id.as_str() },
            None => doc! {},
        };

        let cursor = self.collection.find(filter).await?;
        let bookings = cursor.try_collect().await?;
        Ok(bookings)
    }

    /// Insert a new booking.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn insert(&self, booking: Booking) -> Result<Booking, RepositoryError> {
        self.collection.insert_one(&booking).await?;
        Ok(booking)
    }
}

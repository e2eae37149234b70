//! Train repository.

use futures::TryStreamExt;
use mongodb::{Collection, Database, bson::doc};

use super::RepositoryError;
use crate::models::Train;

/// Name of the backing collection.
pub const COLLECTION: &str = "trains";

/// Repository for scheduled trains.
pub struct TrainRepository {
    collection: Collection<Train>,
}

impl TrainRepository {
    /// Create a new train repository over the given database handle.
    #[must_use]
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(COLLECTION),
        }
    }

    /// List all trains.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Train>, RepositoryError> {
        let cursor = self.collection.find(doc! {}).await?;
        let trains = cursor.try_collect().await?;
        Ok(trains)
    }

    /// Insert a new train.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn insert(&self, train: Train) -> Result<Train, RepositoryError> {
        self.collection.insert_one(&train).await?;
        Ok(train)
    }
}

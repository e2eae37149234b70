//! User repository: the credential store.
//!
//! Owns all access to the `users` collection. Exactly one record exists per
//! email; the unique index created by [`super::ensure_indexes`] enforces the
//! invariant at write time.

use mongodb::{Collection, Database, bson::doc};

use ironrail_core::{Email, UserId};

use super::{RepositoryError, is_duplicate_key};
use crate::models::UserRecord;

/// Name of the backing collection.
pub const COLLECTION: &str = "users";

/// Outcome summary of a seeding pass.
#[derive(Debug, Default, Clone, Copy)]
pub struct SeedOutcome {
    /// Records newly inserted.
    pub inserted: usize,
    /// Records skipped because the email already existed.
    pub skipped: usize,
}

/// Repository for credential records.
pub struct UserRepository {
    collection: Collection<UserRecord>,
}

impl UserRepository {
    /// Create a new user repository over the given database handle.
    #[must_use]
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(COLLECTION),
        }
    }

    /// Look up a record by email.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn find_by_email(
        &self,
        email: &Email,
    ) -> Result<Option<UserRecord>, RepositoryError> {
        let record = self
            .collection
            .find_one(doc! { "email": email.as_str() })
            .await?;
        Ok(record)
    }

    /// Look up a record by its user ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn find_by_user_id(
        &self,
        user_id: &UserId,
    ) -> Result<Option<UserRecord>, RepositoryError> {
        let record = self
            .collection
            .find_one(doc! { "userId": user_id.as_str() })
            .await?;
        Ok(record)
    }

    /// Insert a new credential record.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if a record with the same email
    /// already exists (unique-index violation).
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn insert(&self, record: UserRecord) -> Result<UserRecord, RepositoryError> {
        self.collection.insert_one(&record).await.map_err(|e| {
            if is_duplicate_key(&e) {
                RepositoryError::Conflict("email already exists".to_owned())
            } else {
                RepositoryError::Database(e)
            }
        })?;

        Ok(record)
    }

    /// Insert each record only if no record with its email exists yet.
    ///
    /// Idempotent: safe to call every process start. Losing the insert race
    /// to a concurrent writer counts as already-present, not as a failure.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a lookup or insert fails for a
    /// reason other than a duplicate email.
    pub async fn seed_if_absent(
        &self,
        records: Vec<UserRecord>,
    ) -> Result<SeedOutcome, RepositoryError> {
        let mut outcome = SeedOutcome::default();

        for record in records {
            if self.find_by_email(&record.email).await?.is_some() {
                outcome.skipped += 1;
                continue;
            }

            match self.insert(record).await {
                Ok(_) => outcome.inserted += 1,
                Err(RepositoryError::Conflict(_)) => outcome.skipped += 1,
                Err(other) => return Err(other),
            }
        }

        Ok(outcome)
    }
}

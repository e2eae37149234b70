//! Database operations for the Ironrail MongoDB database.
//!
//! # Collections
//!
//! - `users` - Credential records (unique index on `email`)
//! - `trains` - Scheduled trains
//! - `bookings` - Passenger bookings
//!
//! One repository struct per collection; all mutation is single-document
//! insert. The unique `users.email` index is the sole backstop for the
//! concurrent-registration race: the second writer gets a duplicate-key
//! error, surfaced as [`RepositoryError::Conflict`].

use mongodb::{Client, Database, IndexModel, bson::doc, options::IndexOptions};
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

pub mod bookings;
pub mod trains;
pub mod users;

/// Errors surfaced by repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from the driver.
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., unique email).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Connect to MongoDB and return a handle to the named database.
///
/// The driver maintains its own connection pool; the returned handle is
/// cheap to clone and safe to share across request handlers.
///
/// # Errors
///
/// Returns `mongodb::error::Error` if the connection string is invalid or
/// the initial DNS/topology setup fails.
pub async fn connect(
    database_url: &SecretString,
    database_name: &str,
) -> Result<Database, mongodb::error::Error> {
    let client = Client::with_uri_str(database_url.expose_secret()).await?;
    Ok(client.database(database_name))
}

/// Create the indexes the invariants depend on.
///
/// Idempotent: MongoDB treats creating an existing index as a no-op, so this
/// is safe to call every process start.
///
/// # Errors
///
/// Returns `mongodb::error::Error` if index creation fails.
pub async fn ensure_indexes(database: &Database) -> Result<(), mongodb::error::Error> {
    let email_unique = IndexModel::builder()
        .keys(doc! { "email": 1 })
        .options(IndexOptions::builder().unique(true).build())
        .build();

    database
        .collection::<crate::models::UserRecord>(users::COLLECTION)
        .create_index(email_unique)
        .await?;

    Ok(())
}

/// Readiness probe: round-trips a `ping` command to the server.
///
/// # Errors
///
/// Returns `mongodb::error::Error` when the server is unreachable.
pub async fn ping(database: &Database) -> Result<(), mongodb::error::Error> {
    database.run_command(doc! { "ping": 1 }).await.map(|_| ())
}

/// Whether the error is a duplicate-key write error (code 11000).
pub(crate) fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    use mongodb::error::{ErrorKind, WriteFailure};

    matches!(
        *err.kind,
        ErrorKind::Write(WriteFailure::WriteError(ref write_err)) if write_err.code == 11000
    )
}

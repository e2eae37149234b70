//! User account management commands.
//!
//! # Usage
//!
//! ```bash
//! ir-cli user create -n "Station Admin" -e admin@example.com -p <password> -r admin
//! ```
//!
//! # Environment Variables
//!
//! - `IRONRAIL_DATABASE_URL` - MongoDB connection string
//! - `IRONRAIL_DATABASE_NAME` - Database name (default: ironrail)

use chrono::Utc;
use thiserror::Error;

use ironrail_api::config::HashingConfig;
use ironrail_api::db::{self, RepositoryError, users::UserRepository};
use ironrail_api::models::UserRecord;
use ironrail_api::services::auth::{AuthError, PasswordHasher, validate_password};
use ironrail_core::{Email, EmailError, Role, RoleParseError, UserId};

use super::EnvError;

/// Errors that can occur during user management operations.
#[derive(Debug, Error)]
pub enum UserCommandError {
    /// Required environment variable is missing.
    #[error(transparent)]
    Env(#[from] EnvError),

    /// Database connection error.
    #[error("Database connection error: {0}")]
    Connect(#[from] mongodb::error::Error),

    /// Repository operation failed.
    #[error("Database error: {0}")]
    Repository(#[from] RepositoryError),

    /// Invalid role.
    #[error(transparent)]
    InvalidRole(#[from] RoleParseError),

    /// Invalid email.
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// Password validation or hashing failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// User already exists.
    #[error("User already exists with email: {0}")]
    UserExists(String),
}

/// Create a new user account.
///
/// # Arguments
///
/// * `name` - Display name
/// * `email` - Email address
/// * `password` - Plaintext password (hashed before storage)
/// * `role` - Account role (`admin` or `customer`)
///
/// # Returns
///
/// The ID of the created user.
///
/// # Errors
///
/// Returns `UserCommandError` when validation fails, the email is taken, or
/// the database is unreachable.
pub async fn create(
    name: &str,
    email: &str,
    password: &str,
    role: &str,
) -> Result<UserId, UserCommandError> {
    dotenvy::dotenv().ok();

    // Parse and validate inputs before touching the database
    let role: Role = role.parse()?;
    let email = Email::parse(email)?;
    validate_password(password)?;

    let (database_url, database_name) = super::database_env()?;

    tracing::info!("Connecting to database...");
    let database = db::connect(&database_url, &database_name).await?;
    db::ensure_indexes(&database).await?;

    let users = UserRepository::new(&database);

    // Check-then-insert; the unique email index still backstops races
    if users.find_by_email(&email).await?.is_some() {
        return Err(UserCommandError::UserExists(email.into_inner()));
    }

    tracing::info!("Creating user: {} ({})", email, role);

    let hasher = PasswordHasher::new(&HashingConfig::default())?;
    let now = Utc::now();
    let record = UserRecord {
        user_id: UserId::generate(),
        name: name.to_owned(),
        email: email.clone(),
        password_hash: hasher.hash(password)?,
        role,
        created_at: now,
        updated_at: now,
    };

    let record = users.insert(record).await.map_err(|e| match e {
        RepositoryError::Conflict(_) => UserCommandError::UserExists(email.into_inner()),
        other => UserCommandError::Repository(other),
    })?;

    tracing::info!(
        "User created successfully! ID: {}, Email: {}, Role: {}",
        record.user_id,
        record.email,
        record.role
    );

    Ok(record.user_id)
}

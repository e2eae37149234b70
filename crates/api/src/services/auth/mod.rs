//! Authentication service.
//!
//! Orchestrates the credential store, password hasher, and token issuer for
//! registration, login, and predefined-account seeding. Hashing is an
//! explicit call at the point of record creation - records never hash
//! themselves.

mod error;
pub mod password;
pub mod token;

pub use error::AuthError;
pub use password::PasswordHasher;
pub use token::{Claims, TokenError, TokenIssuer};

use chrono::Utc;
use mongodb::Database;

use ironrail_core::{Email, Role, UserId};

use crate::db::RepositoryError;
use crate::db::users::{SeedOutcome, UserRepository};
use crate::models::{User, UserRecord};
use crate::seed::SeedUser;

/// Minimum password length.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Successful login: the public user view plus a freshly issued token.
#[derive(Debug)]
pub struct LoginOutcome {
    pub token: String,
    pub user: User,
}

/// Authentication service.
///
/// Handles user registration, login, and predefined-account seeding.
pub struct AuthService<'a> {
    users: UserRepository,
    hasher: &'a PasswordHasher,
    tokens: &'a TokenIssuer,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub fn new(database: &Database, hasher: &'a PasswordHasher, tokens: &'a TokenIssuer) -> Self {
        Self {
            users: UserRepository::new(database),
            hasher,
            tokens,
        }
    }

    /// Register a new customer account.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingField` if a required field is empty.
    /// Returns `AuthError::InvalidEmail` if the email format is invalid.
    /// Returns `AuthError::WeakPassword` if the password doesn't meet requirements.
    /// Returns `AuthError::UserAlreadyExists` if the email is already registered.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, AuthError> {
        self.create_user(name, email, password, Role::Customer)
            .await
    }

    /// Create an account with an explicit role.
    ///
    /// Used by registration (customer role) and by seeding/ops tooling,
    /// which may create admins.
    ///
    /// # Errors
    ///
    /// Same as [`Self::register`].
    pub async fn create_user(
        &self,
        name: &str,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<User, AuthError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AuthError::MissingField("name"));
        }
        if email.is_empty() {
            return Err(AuthError::MissingField("email"));
        }
        if password.is_empty() {
            return Err(AuthError::MissingField("password"));
        }

        let email = Email::parse(email)?;
        validate_password(password)?;

        // Hash at the point of creation; plaintext never reaches the store.
        let password_hash = self.hasher.hash(password)?;

        let now = Utc::now();
        let record = UserRecord {
            user_id: UserId::generate(),
            name: name.to_owned(),
            email,
            password_hash,
            role,
            created_at: now,
            updated_at: now,
        };

        let record = self.users.insert(record).await.map_err(|e| match e {
            RepositoryError::Conflict(_) => AuthError::UserAlreadyExists,
            other => AuthError::Repository(other),
        })?;

        Ok(record.into())
    }

    /// Login with email and password, issuing a bearer token on success.
    ///
    /// Unknown email and wrong password produce the same
    /// `AuthError::InvalidCredentials`, so callers cannot probe which
    /// accounts exist.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingField` if a field is empty.
    /// Returns `AuthError::InvalidCredentials` if the email/password is wrong.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, AuthError> {
        if email.is_empty() {
            return Err(AuthError::MissingField("email"));
        }
        if password.is_empty() {
            return Err(AuthError::MissingField("password"));
        }

        let email = Email::parse(email)?;

        let record = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        self.hasher.verify(password, &record.password_hash)?;

        let token = self.tokens.issue(&record.user_id, record.role)?;

        Ok(LoginOutcome {
            token,
            user: record.into(),
        })
    }

    /// Look up the public view of a user by ID.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if no such user exists (a
    /// verified token whose subject has vanished is treated as bad
    /// credentials, not as a distinct condition).
    pub async fn current_user(&self, user_id: &UserId) -> Result<User, AuthError> {
        let record = self
            .users
            .find_by_user_id(user_id)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        Ok(record.into())
    }

    /// Apply predefined accounts, inserting each only if its email is absent.
    ///
    /// Idempotent: safe to call every process start.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail`/`AuthError::WeakPassword` if a seed
    /// entry is malformed, or `AuthError::Repository` on store failure.
    pub async fn seed_if_absent(&self, seeds: &[SeedUser]) -> Result<SeedOutcome, AuthError> {
        let records = crate::seed::build_records(seeds, self.hasher)?;
        let outcome = self.users.seed_if_absent(records).await?;
        Ok(outcome)
    }
}

/// Validate a password meets requirements.
///
/// # Errors
///
/// Returns `AuthError::WeakPassword` if the password is too short.
pub fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_password_length() {
        assert!(validate_password("pw123456").is_ok());
        assert!(matches!(
            validate_password("short"),
            Err(AuthError::WeakPassword(_))
        ));
        assert!(matches!(
            validate_password(""),
            Err(AuthError::WeakPassword(_))
        ));
    }
}

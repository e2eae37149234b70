//! Predefined-account seed files.
//!
//! Predefined identities live in a YAML file named by configuration, never
//! in source:
//!
//! ```yaml
//! users:
//!   - name: Station Admin
//!     email: admin@example.com
//!     password: a-real-password
//!     role: admin
//!   - name: Demo Customer
//!     email: customer@example.com
//!     password: another-password
//! ```
//!
//! Seeding is idempotent: each entry is inserted only when no record with its
//! email exists, so applying the same file every process start is safe.

use std::fmt;
use std::path::Path;

use chrono::Utc;
use serde::Deserialize;
use thiserror::Error;

use ironrail_core::{Email, Role, UserId};

use crate::models::UserRecord;
use crate::services::auth::{AuthError, PasswordHasher, validate_password};

/// Errors loading a seed file.
#[derive(Debug, Error)]
pub enum SeedFileError {
    /// The file could not be read.
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid YAML or doesn't match the expected shape.
    #[error("invalid seed file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// A predefined account, inserted at startup only if absent.
#[derive(Clone, Deserialize)]
pub struct SeedUser {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default = "default_role")]
    pub role: Role,
}

const fn default_role() -> Role {
    Role::Customer
}

impl fmt::Debug for SeedUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeedUser")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("role", &self.role)
            .finish()
    }
}

/// Top-level shape of a seed file.
#[derive(Debug, Deserialize)]
pub struct SeedConfig {
    pub users: Vec<SeedUser>,
}

/// Load and parse a seed file.
///
/// # Errors
///
/// Returns `SeedFileError` if the file cannot be read or parsed.
pub async fn load_from_path(path: &Path) -> Result<Vec<SeedUser>, SeedFileError> {
    let content = tokio::fs::read_to_string(path).await?;
    let config: SeedConfig = serde_yaml::from_str(&content)?;
    Ok(config.users)
}

/// Validate seed entries and hash their passwords into insertable records.
///
/// # Errors
///
/// Returns `AuthError::InvalidEmail` or `AuthError::WeakPassword` for a
/// malformed entry, or `AuthError::PasswordHash` if hashing fails.
pub fn build_records(
    seeds: &[SeedUser],
    hasher: &PasswordHasher,
) -> Result<Vec<UserRecord>, AuthError> {
    let mut records = Vec::with_capacity(seeds.len());

    for seed in seeds {
        let email = Email::parse(&seed.email)?;
        validate_password(&seed.password)?;

        let now = Utc::now();
        records.push(UserRecord {
            user_id: UserId::generate(),
            name: seed.name.clone(),
            email,
            password_hash: hasher.hash(&seed.password)?,
            role: seed.role,
            created_at: now,
            updated_at: now,
        });
    }

    Ok(records)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::HashingConfig;

    const SAMPLE: &str = r"
users:
  - name: Station Admin
    email: admin@example.com
    password: every-lock-has-a-key
    role: admin
  - name: Demo Customer
    email: customer@example.com
    password: window-seat-please
";

    #[test]
    fn test_parse_seed_config() {
        let config: SeedConfig = serde_yaml::from_str(SAMPLE).unwrap();

        assert_eq!(config.users.len(), 2);
        let admin = config.users.first().unwrap();
        assert_eq!(admin.email, "admin@example.com");
        assert_eq!(admin.role, Role::Admin);
    }

    #[test]
    fn test_role_defaults_to_customer() {
        let config: SeedConfig = serde_yaml::from_str(SAMPLE).unwrap();

        let customer = config.users.last().unwrap();
        assert_eq!(customer.role, Role::Customer);
    }

    #[test]
    fn test_debug_redacts_password() {
        let config: SeedConfig = serde_yaml::from_str(SAMPLE).unwrap();
        let debug = format!("{:?}", config.users.first().unwrap());

        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("every-lock-has-a-key"));
    }

    #[test]
    fn test_build_records_hashes_passwords() {
        let config: SeedConfig = serde_yaml::from_str(SAMPLE).unwrap();
        let hasher = PasswordHasher::new(&HashingConfig::default()).unwrap();

        let records = build_records(&config.users, &hasher).unwrap();

        assert_eq!(records.len(), 2);
        for (record, seed) in records.iter().zip(&config.users) {
            assert_ne!(record.password_hash, seed.password);
            assert!(record.password_hash.starts_with("$argon2id$"));
            assert!(hasher.verify(&seed.password, &record.password_hash).is_ok());
        }
    }

    #[test]
    fn test_build_records_rejects_bad_email() {
        let hasher = PasswordHasher::new(&HashingConfig::default()).unwrap();
        let seeds = vec![SeedUser {
            name: "Broken".to_owned(),
            email: "not-an-email".to_owned(),
            password: "long-enough-pw".to_owned(),
            role: Role::Customer,
        }];

        assert!(matches!(
            build_records(&seeds, &hasher),
            Err(AuthError::InvalidEmail(_))
        ));
    }

    #[test]
    fn test_build_records_rejects_weak_password() {
        let hasher = PasswordHasher::new(&HashingConfig::default()).unwrap();
        let seeds = vec![SeedUser {
            name: "Broken".to_owned(),
            email: "ok@example.com".to_owned(),
            password: "short".to_owned(),
            role: Role::Customer,
        }];

        assert!(matches!(
            build_records(&seeds, &hasher),
            Err(AuthError::WeakPassword(_))
        ));
    }
}

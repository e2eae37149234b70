//! CLI command implementations.

pub mod seed;
pub mod user;

use secrecy::SecretString;

/// Errors shared by commands that need a database connection.
#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),
}

/// Read the database URL and name from the environment.
///
/// # Errors
///
/// Returns `EnvError::MissingEnvVar` if `IRONRAIL_DATABASE_URL` is unset.
pub(crate) fn database_env() -> Result<(SecretString, String), EnvError> {
    let url = std::env::var("IRONRAIL_DATABASE_URL")
        .map(SecretString::from)
        .map_err(|_| EnvError::MissingEnvVar("IRONRAIL_DATABASE_URL"))?;
    let name =
        std::env::var("IRONRAIL_DATABASE_NAME").unwrap_or_else(|_| "ironrail".to_owned());

    Ok((url, name))
}

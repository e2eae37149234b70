//! Application state shared across handlers.

use std::sync::Arc;

use mongodb::Database;

use crate::config::ApiConfig;
use crate::services::auth::{AuthError, AuthService, PasswordHasher, TokenIssuer};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to shared
/// resources like the database handle, the password hasher, and the token
/// issuer.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ApiConfig,
    database: Database,
    hasher: PasswordHasher,
    tokens: TokenIssuer,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured Argon2 parameters are invalid.
    pub fn new(config: ApiConfig, database: Database) -> Result<Self, AuthError> {
        let hasher = PasswordHasher::new(&config.hashing)?;
        let tokens = TokenIssuer::new(&config.jwt_secret, config.token_ttl_secs);

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                database,
                hasher,
                tokens,
            }),
        })
    }

    /// Get a reference to the configuration.
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.inner.config
    }

    /// Get a reference to the database handle.
    #[must_use]
    pub fn database(&self) -> &Database {
        &self.inner.database
    }

    /// Get a reference to the password hasher.
    #[must_use]
    pub fn hasher(&self) -> &PasswordHasher {
        &self.inner.hasher
    }

    /// Get a reference to the token issuer.
    #[must_use]
    pub fn tokens(&self) -> &TokenIssuer {
        &self.inner.tokens
    }

    /// Auth service wired to this state's store, hasher, and token issuer.
    #[must_use]
    pub fn auth(&self) -> AuthService<'_> {
        AuthService::new(&self.inner.database, &self.inner.hasher, &self.inner.tokens)
    }
}

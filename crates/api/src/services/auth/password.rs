//! Password hashing.
//!
//! Argon2id with a fresh random salt per hash, so the same plaintext yields a
//! different stored value on every call. Cost parameters come from
//! configuration rather than being baked in.

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        PasswordHash, PasswordHasher as _, PasswordVerifier as _, SaltString, rand_core::OsRng,
    },
};

use super::AuthError;
use crate::config::HashingConfig;

/// One-way password hasher, configured once at startup.
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    /// Build a hasher from the configured Argon2 cost parameters.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::PasswordHash` if the parameters are out of range.
    pub fn new(config: &HashingConfig) -> Result<Self, AuthError> {
        let params = Params::new(
            config.memory_kib,
            config.iterations,
            config.parallelism,
            None,
        )
        .map_err(|_| AuthError::PasswordHash)?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// Hash a password with a fresh random salt.
    ///
    /// Returns the PHC-formatted string (algorithm, parameters, salt, and
    /// digest) suitable for storage.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::PasswordHash` if hashing fails.
    pub fn hash(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|_| AuthError::PasswordHash)
    }

    /// Verify a password against a stored hash.
    ///
    /// Comparison happens inside the argon2 crate in constant time. A
    /// malformed stored hash fails closed: it maps to the same
    /// `InvalidCredentials` error as a mismatch, never an ambiguous success.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` on mismatch or malformed hash.
    pub fn verify(&self, password: &str, hash: &str) -> Result<(), AuthError> {
        let parsed = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;

        self.argon2
            .verify_password(password.as_bytes(), &parsed)
            .map_err(|_| AuthError::InvalidCredentials)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn hasher() -> PasswordHasher {
        PasswordHasher::new(&HashingConfig::default()).unwrap()
    }

    #[test]
    fn test_hash_then_verify_roundtrip() {
        let hasher = hasher();
        let hash = hasher.hash("correct horse battery staple").unwrap();

        assert!(hasher.verify("correct horse battery staple", &hash).is_ok());
    }

    #[test]
    fn test_same_password_hashes_differently() {
        let hasher = hasher();
        let first = hasher.hash("pw123456").unwrap();
        let second = hasher.hash("pw123456").unwrap();

        // Salted: identical inputs must not produce identical stored values.
        assert_ne!(first, second);
        assert!(hasher.verify("pw123456", &first).is_ok());
        assert!(hasher.verify("pw123456", &second).is_ok());
    }

    #[test]
    fn test_wrong_password_fails() {
        let hasher = hasher();
        let hash = hasher.hash("pw123456").unwrap();

        assert!(matches!(
            hasher.verify("pw1234567", &hash),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_malformed_hash_fails_closed() {
        let hasher = hasher();

        assert!(matches!(
            hasher.verify("pw123456", "not-a-phc-string"),
            Err(AuthError::InvalidCredentials)
        ));
        assert!(matches!(
            hasher.verify("pw123456", ""),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_hash_is_not_plaintext() {
        let hasher = hasher();
        let hash = hasher.hash("pw123456").unwrap();

        assert!(!hash.contains("pw123456"));
        assert!(hash.starts_with("$argon2id$"));
    }

    #[test]
    fn test_invalid_params_rejected() {
        let config = HashingConfig {
            memory_kib: 0,
            iterations: 0,
            parallelism: 0,
        };

        assert!(matches!(
            PasswordHasher::new(&config),
            Err(AuthError::PasswordHash)
        ));
    }
}

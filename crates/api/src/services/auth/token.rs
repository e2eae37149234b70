//! Stateless bearer tokens.
//!
//! Tokens are HS256 JWTs carrying the user's identity and role with a fixed
//! expiry. There is no persistent token registry: verification is signature +
//! expiry alone, and a token cannot be revoked before it expires.

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use ironrail_core::{Role, UserId};

/// Claims embedded in a signed bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user's ID.
    pub sub: UserId,
    /// Account role at issuance time.
    pub role: Role,
    /// Issued-at, seconds since the Unix epoch.
    pub iat: i64,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
}

/// Errors from token issuance or verification.
#[derive(Debug, Error)]
pub enum TokenError {
    /// Signing failed.
    #[error("token creation failed: {0}")]
    Creation(jsonwebtoken::errors::Error),

    /// Signature mismatch, expiry passed, or malformed structure.
    #[error("invalid token")]
    Invalid,
}

/// Issues and verifies signed bearer tokens.
///
/// The signing secret and TTL are explicit configuration passed in at
/// startup; nothing here is global or hardcoded.
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_secs: i64,
    validation: Validation,
}

impl TokenIssuer {
    /// Create an issuer from a signing secret and a token TTL in seconds.
    #[must_use]
    pub fn new(secret: &SecretString, ttl_secs: u64) -> Self {
        let secret_bytes = secret.expose_secret().as_bytes();

        // Zero leeway: a token is invalid the second its expiry passes.
        let mut validation = Validation::default();
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(secret_bytes),
            decoding: DecodingKey::from_secret(secret_bytes),
            ttl_secs: i64::try_from(ttl_secs).unwrap_or(i64::MAX),
            validation,
        }
    }

    /// Issue a signed token for the given identity and role.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Creation` if signing fails.
    pub fn issue(&self, user_id: &UserId, role: Role) -> Result<String, TokenError> {
        let iat = Utc::now().timestamp();
        let claims = Claims {
            sub: user_id.clone(),
            role,
            iat,
            exp: iat.saturating_add(self.ttl_secs),
        };

        encode(&Header::default(), &claims, &self.encoding).map_err(TokenError::Creation)
    }

    /// Verify a token and return its claims.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Invalid` on signature mismatch, expiry, or a
    /// malformed token. The cause is deliberately not distinguished.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| TokenError::Invalid)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const SECRET: &str = "kX9mQ2vR7wT4uZ8pL3nB6cY1fH5jD0gS";
    const TTL: u64 = 3600;

    fn issuer() -> TokenIssuer {
        TokenIssuer::new(&SecretString::from(SECRET), TTL)
    }

    #[test]
    fn test_issue_then_verify_roundtrip() {
        let issuer = issuer();
        let user_id = UserId::new("u-1");

        let token = issuer.issue(&user_id, Role::Admin).unwrap();
        let claims = issuer.verify(&token).unwrap();

        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.role, Role::Admin);
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = issuer().issue(&UserId::new("u-1"), Role::Customer).unwrap();

        let other = TokenIssuer::new(
            &SecretString::from("aB3xY9mK2nL5pQ7rT0uW4zC6fH8jD1gS"),
            TTL,
        );
        assert!(matches!(other.verify(&token), Err(TokenError::Invalid)));
    }

    #[test]
    fn test_tampered_token_rejected() {
        let issuer = issuer();
        let token = issuer.issue(&UserId::new("u-1"), Role::Customer).unwrap();

        // Flip a character in the payload segment.
        let mut tampered: Vec<String> = token.split('.').map(String::from).collect();
        let payload = tampered.get_mut(1).unwrap();
        let swapped = if payload.ends_with('A') { "B" } else { "A" };
        payload.truncate(payload.len() - 1);
        payload.push_str(swapped);
        let tampered = tampered.join(".");

        assert!(matches!(issuer.verify(&tampered), Err(TokenError::Invalid)));
    }

    #[test]
    fn test_expired_token_rejected() {
        let issuer = issuer();
        let now = Utc::now().timestamp();

        // Hand-craft claims whose expiry is already in the past.
        let claims = Claims {
            sub: UserId::new("u-1"),
            role: Role::Customer,
            iat: now - 120,
            exp: now - 60,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        assert!(matches!(issuer.verify(&token), Err(TokenError::Invalid)));
    }

    #[test]
    fn test_malformed_token_rejected() {
        let issuer = issuer();

        assert!(issuer.verify("").is_err());
        assert!(issuer.verify("not.a.token").is_err());
        assert!(issuer.verify("a.b").is_err());
    }
}

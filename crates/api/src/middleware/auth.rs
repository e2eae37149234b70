//! Authentication extractors.
//!
//! Provides a bearer-token extractor for route handlers that need the
//! calling identity. Verification is stateless: signature + expiry on the
//! presented token, nothing else.

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use crate::error::AppError;
use crate::services::auth::Claims;
use crate::state::AppState;

/// Extractor that requires a valid bearer token.
///
/// Rejects with 401 when the `Authorization` header is missing, not a
/// `Bearer` scheme, or carries a token that fails verification.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     AuthBearer(claims): AuthBearer,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", claims.sub)
/// }
/// ```
pub struct AuthBearer(pub Claims);

impl FromRequestParts<AppState> for AuthBearer {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header_value = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::Unauthorized("missing bearer token".to_owned()))?;

        let token = header_value
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::Unauthorized("missing bearer token".to_owned()))?;

        let claims = state
            .tokens()
            .verify(token)
            .map_err(|_| AppError::Unauthorized("invalid bearer token".to_owned()))?;

        Ok(Self(claims))
    }
}

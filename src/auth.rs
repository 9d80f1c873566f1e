//! Bearer token authentication

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{error::AppError, routes::AppState};

/// JWT claims payload
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Expiration timestamp
    pub exp: u64,
}

/// Generate a JWT token for a user
pub fn generate_token(
    user_id: impl Into<String>,
    secret: &str,
    expiration_days: i64,
) -> anyhow::Result<String> {
    let exp = OffsetDateTime::now_utc() + time::Duration::days(expiration_days);

    let claims = Claims {
        sub: user_id.into(),
        exp: u64::try_from(exp.unix_timestamp())?,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;

    Ok(token)
}

/// Validate and decode a JWT token
pub fn validate_token(token: &str, secret: &str) -> jsonwebtoken::errors::Result<Claims> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )?;

    Ok(token_data.claims)
}

/// The user a request acts on behalf of.
///
/// Rejects with 401 unless the request carries a valid bearer token whose
/// subject is still a known user.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| {
                    AppError::Unauthorized(
                        "Authentication credentials were not provided".to_owned(),
                    )
                })?;

        let claims = validate_token(bearer.token(), &state.config.jwt.secret).map_err(|e| {
            tracing::debug!(error = %e, "Invalid or expired token");
            AppError::Unauthorized("Invalid or expired token".to_owned())
        })?;

        if state.user_query.find(&claims.sub).await?.is_none() {
            tracing::debug!(user_id = %claims.sub, "Token subject no longer exists");
            return Err(AppError::Unauthorized("User not found".to_owned()));
        }

        Ok(AuthUser {
            user_id: claims.sub,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test_secret_key_minimum_32_characters_long";

    #[test]
    fn test_token_round_trip() {
        let token = generate_token("01HUSER", SECRET, 7).unwrap();
        let claims = validate_token(&token, SECRET).unwrap();

        assert_eq!(claims.sub, "01HUSER");
    }

    #[test]
    fn test_rejects_wrong_secret() {
        let token = generate_token("01HUSER", SECRET, 7).unwrap();

        assert!(validate_token(&token, "another_secret_key_minimum_32_chars_long").is_err());
    }

    #[test]
    fn test_rejects_expired_token() {
        let token = generate_token("01HUSER", SECRET, -1).unwrap();

        assert!(validate_token(&token, SECRET).is_err());
    }
}

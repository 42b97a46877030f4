//! Bearer token extraction and decoding.
//!
//! Policy, applied at every call site: no `Authorization` header means an
//! anonymous caller; a header that is present but malformed, or a token that
//! fails verification, is an authentication error.

use crate::error::{AppError, AppResult};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

/// Claims carried by access tokens. Tokens are issued elsewhere.
#[derive(Debug, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub exp: usize,
}

/// The user a request acts for. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerIdentity {
    pub user_id: String,
}

#[derive(Clone)]
pub struct TokenDecoder {
    key: DecodingKey,
    validation: Validation,
}

impl TokenDecoder {
    pub fn new(secret: &str) -> Self {
        Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    pub fn decode(&self, token: &str) -> AppResult<CallerIdentity> {
        let data = decode::<AccessTokenClaims>(token, &self.key, &self.validation).map_err(|e| {
            log::debug!("Rejected access token: {}", e);
            AppError::authentication("invalid or expired token")
        })?;

        if data.claims.user_id.trim().is_empty() {
            return Err(AppError::authentication("token carries no user id"));
        }

        Ok(CallerIdentity {
            user_id: data.claims.user_id,
        })
    }

    /// `None` for anonymous callers; a present token must decode.
    pub fn identify(&self, token: Option<&str>) -> AppResult<Option<CallerIdentity>> {
        token.map(|token| self.decode(token)).transpose()
    }
}

/// Extracts the token from an `Authorization` header value.
pub fn bearer_token(header: Option<&str>) -> AppResult<Option<&str>> {
    let Some(value) = header else {
        return Ok(None);
    };

    let mut parts = value.trim().splitn(2, ' ');
    match (parts.next(), parts.next().map(str::trim)) {
        (Some(scheme), Some(token)) if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() => {
            Ok(Some(token))
        }
        _ => Err(AppError::authentication(
            "Authorization header must be 'Bearer <token>'",
        )),
    }
}

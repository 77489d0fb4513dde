//! JWT utilities for admin identity
//!
//! The token subject carries the Steam64 id of the signed-in user. Issuing
//! tokens is only needed by tooling and tests; the panel itself only reads them.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use panel_core::SteamId;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (Steam64 id as a decimal string)
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Display name at sign-in, informational only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Claims {
    /// Get the subject as a SteamId
    ///
    /// # Errors
    /// Returns an error if the subject is not an individual Steam64 id
    pub fn steam_id(&self) -> Result<SteamId, AppError> {
        SteamId::parse(&self.sub).map_err(|_| AppError::InvalidToken)
    }

    /// Check if the token is expired
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

/// JWT service for encoding and decoding identity tokens
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_expiry: i64,
}

impl JwtService {
    /// Create a new JWT service with the given secret and token lifetime in seconds
    #[must_use]
    pub fn new(secret: &str, token_expiry: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            token_expiry,
        }
    }

    /// Issue an identity token for a Steam account
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn issue_token(&self, steam_id: SteamId) -> Result<String, AppError> {
        self.issue_token_with_name(steam_id, None)
    }

    /// Issue an identity token carrying the display name
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn issue_token_with_name(
        &self,
        steam_id: SteamId,
        name: Option<String>,
    ) -> Result<String, AppError> {
        let now = Utc::now();

        let claims = Claims {
            sub: steam_id.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.token_expiry)).timestamp(),
            name,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("Failed to encode JWT")))
    }

    /// Decode and validate a JWT token
    ///
    /// # Errors
    /// Returns an error if the token is invalid or expired
    pub fn decode_token(&self, token: &str) -> Result<Claims, AppError> {
        let validation = Validation::default();

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::InvalidToken,
            }
        })?;

        Ok(token_data.claims)
    }

    /// Validate a token and return the Steam64 identity it names
    ///
    /// # Errors
    /// Returns an error if the token is invalid, expired, or names no valid account
    pub fn validate(&self, token: &str) -> Result<SteamId, AppError> {
        self.decode_token(token)?.steam_id()
    }
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("token_expiry", &self.token_expiry)
            .finish_non_exhaustive()
    }
}

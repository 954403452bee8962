//! Session token issue and verification.
//!
//! Tokens are HS256-signed JWTs carrying a [`SessionClaims`] payload. The
//! only durable copy of a session is the token itself; there is no
//! server-side session table, so rotating the secret ends every session.

use fintrack_core::types::DbId;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Identity facts embedded in every session token.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SessionClaims {
    /// Subject -- the account's internal database id.
    pub sub: DbId,
    pub email: String,
    pub full_name: String,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
}

impl SessionClaims {
    /// Claims for `sub` issued at `issued_at` and valid for `ttl_secs`.
    pub fn new(
        sub: DbId,
        email: impl Into<String>,
        full_name: impl Into<String>,
        issued_at: i64,
        ttl_secs: i64,
    ) -> Self {
        Self {
            sub,
            email: email.into(),
            full_name: full_name.into(),
            iat: issued_at,
            exp: issued_at + ttl_secs,
        }
    }
}

/// Sign `claims` with HS256.
pub fn issue_token(
    claims: &SessionClaims,
    secret: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Verify a possibly-absent token and return its claims.
///
/// Any failure (missing, malformed, bad signature, expired) yields `None`.
/// Expiry is checked with zero leeway.
pub fn verify_token(token: Option<&str>, secret: &str) -> Option<SessionClaims> {
    let token = token?;

    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    match decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    ) {
        Ok(data) => Some(data.claims),
        Err(e) => {
            tracing::debug!(error = %e, "Rejected session token");
            None
        }
    }
}

//! Bearer-token login middleware and the `LoginIdentity` extractor
//!
//! The middleware verifies an HS256 JWT from the `Authorization` header and
//! attaches the resulting [`LoginIdentity`] to the request extensions. Handlers
//! receive it as a typed argument through the extractor below.

use super::error::Problem;
use crate::contract::LoginIdentity;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// Claims carried by login tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginClaims {
    /// Login username
    pub username: String,
    /// Expiry as seconds since the Unix epoch
    pub exp: u64,
}

/// HS256 token verifier and issuer
#[derive(Clone)]
pub struct JwtAuth {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl JwtAuth {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    /// Issue a token for `username` valid for `ttl`
    pub fn issue(&self, username: &str, ttl: Duration) -> anyhow::Result<String> {
        let claims = LoginClaims {
            username: username.to_string(),
            exp: jsonwebtoken::get_current_timestamp() + ttl.as_secs(),
        };
        Ok(jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?)
    }

    /// Verify a token and return the identity it carries
    pub fn verify(&self, token: &str) -> Result<LoginIdentity, jsonwebtoken::errors::Error> {
        let data = jsonwebtoken::decode::<LoginClaims>(token, &self.decoding, &self.validation)?;
        Ok(LoginIdentity::new(data.claims.username))
    }
}

/// Reject requests without a valid bearer token, otherwise attach the identity
pub async fn require_login(
    State(auth): State<Arc<JwtAuth>>,
    mut request: Request,
    next: Next,
) -> Result<Response, Problem> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            Problem::unauthenticated("Missing Authorization header.")
        })?;

    let token = header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("Invalid Authorization header format");
        Problem::unauthenticated("Invalid Authorization header format.")
    })?;

    let identity = auth.verify(token.trim()).map_err(|e| {
        tracing::warn!(error = %e, "Invalid login token");
        Problem::unauthenticated("Invalid or expired login token.")
    })?;

    request.extensions_mut().insert(identity);
    Ok(next.run(request).await)
}

impl<S> FromRequestParts<S> for LoginIdentity
where
    S: Send + Sync,
{
    type Rejection = Problem;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<LoginIdentity>().cloned().ok_or_else(|| {
            tracing::error!("LoginIdentity missing from request; is the login middleware installed?");
            Problem::unauthenticated("Login required.")
        })
    }
}

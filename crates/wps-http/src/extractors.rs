//! Axum extractors pulling the two bearer credential shapes used by the
//! HTTP surface (§6): the internal assertion (component B) and the
//! caller-presented work-package access token (component G).

use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use wps_core::WpsError;

use crate::error::WpsHttpError;

fn bearer_token(parts: &Parts) -> Result<&str, WpsHttpError> {
    parts
        .headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .filter(|token| !token.is_empty())
        .ok_or_else(|| WpsHttpError::from(WpsError::NotAuthenticated))
}

/// The raw internal bearer assertion, still unverified — verification needs
/// the `IdentityVerifier` held by the manager, so handlers pass this through
/// rather than verifying it at the extractor layer.
pub struct InternalAssertion(pub String);

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for InternalAssertion {
    type Rejection = WpsHttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(InternalAssertion(bearer_token(parts)?.to_string()))
    }
}

/// The raw presented access token (`"{wp_id}:{secret}"`), still unverified.
pub struct AccessToken(pub String);

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for AccessToken {
    type Rejection = WpsHttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(AccessToken(bearer_token(parts)?.to_string()))
    }
}

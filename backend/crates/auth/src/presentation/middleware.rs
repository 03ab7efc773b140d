//! Auth Middleware
//!
//! Bearer-token gate for protected routes.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::HeaderMap;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use chrono::{DateTime, Utc};
use platform::bearer::extract_bearer;
use std::sync::Arc;

use crate::application::TokenService;
use crate::domain::entity::RequestIdentity;
use crate::error::AuthError;

/// Resolve the caller from the `Authorization` header
///
/// Absent or unparseable headers are `MissingToken`; everything else is
/// decided by [`TokenService::verify`].
pub fn authenticate(
    headers: &HeaderMap,
    tokens: &TokenService,
    now: DateTime<Utc>,
) -> Result<RequestIdentity, AuthError> {
    let token = extract_bearer(headers).ok_or(AuthError::MissingToken)?;
    let user_id = tokens.verify(token, now)?;
    Ok(RequestIdentity::new(user_id))
}

/// Middleware that requires a valid bearer token
///
/// On success the [`RequestIdentity`] is stored in the request extensions.
pub async fn require_bearer(
    State(tokens): State<Arc<TokenService>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let identity = authenticate(req.headers(), &tokens, Utc::now())?;

    tracing::debug!(user_id = %identity.user_id, "Request authenticated");

    req.extensions_mut().insert(identity);
    Ok(next.run(req).await)
}

/// Extract the identity placed by [`require_bearer`]
///
/// Rejects with `MissingToken` when used on a route without the middleware.
impl<S> FromRequestParts<S> for RequestIdentity
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<RequestIdentity>()
            .copied()
            .ok_or(AuthError::MissingToken)
    }
}

//! Auth Router

use axum::{Router, routing::post};
use platform::password::PasswordHasher;
use std::sync::Arc;

use crate::application::TokenService;
use crate::domain::repository::AccountDirectory;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router (`/signup`, `/signin`) for any directory
pub fn auth_router<D>(
    directory: Arc<D>,
    hasher: Arc<PasswordHasher>,
    tokens: Arc<TokenService>,
) -> Router
where
    D: AccountDirectory + Send + Sync + 'static,
{
    let state = AuthAppState {
        directory,
        hasher,
        tokens,
    };

    Router::new()
        .route("/signup", post(handlers::sign_up::<D>))
        .route("/signin", post(handlers::sign_in::<D>))
        .with_state(state)
}

//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use chrono::Utc;
use platform::password::PasswordHasher;
use std::sync::Arc;

use crate::application::{
    SignInInput, SignInUseCase, SignUpInput, SignUpUseCase, TokenService,
};
use crate::domain::repository::AccountDirectory;
use crate::error::{SigninError, SignupError};
use crate::presentation::dto::{SignInRequest, SignInResponse, SignUpRequest, SignUpResponse};
use crate::presentation::extract::{SignInBody, SignUpBody};

/// Shared state for auth handlers
pub struct AuthAppState<D>
where
    D: AccountDirectory + Send + Sync + 'static,
{
    pub directory: Arc<D>,
    pub hasher: Arc<PasswordHasher>,
    pub tokens: Arc<TokenService>,
}

// Manual impl: only the Arcs are cloned, so `D` itself need not be Clone
impl<D> Clone for AuthAppState<D>
where
    D: AccountDirectory + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            directory: self.directory.clone(),
            hasher: self.hasher.clone(),
            tokens: self.tokens.clone(),
        }
    }
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /signup
pub async fn sign_up<D>(
    State(state): State<AuthAppState<D>>,
    SignUpBody(req): SignUpBody<SignUpRequest>,
) -> Result<(StatusCode, Json<SignUpResponse>), SignupError>
where
    D: AccountDirectory + Send + Sync + 'static,
{
    let use_case = SignUpUseCase::new(state.directory.clone(), state.hasher.clone());

    let input = SignUpInput {
        name: req.name.unwrap_or_default(),
        email: req.email.unwrap_or_default(),
        password: req.password.unwrap_or_default(),
    };

    use_case.execute(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(SignUpResponse {
            message: "Signup successful".to_string(),
        }),
    ))
}

// ============================================================================
// Sign In
// ============================================================================

/// POST /signin
pub async fn sign_in<D>(
    State(state): State<AuthAppState<D>>,
    SignInBody(req): SignInBody<SignInRequest>,
) -> Result<Json<SignInResponse>, SigninError>
where
    D: AccountDirectory + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(
        state.directory.clone(),
        state.hasher.clone(),
        state.tokens.clone(),
    );

    let input = SignInInput {
        email: req.email.unwrap_or_default(),
        password: req.password.unwrap_or_default(),
    };

    let output = use_case.execute(input, Utc::now()).await?;

    Ok(Json(SignInResponse {
        message: "Login successful".to_string(),
        token: output.token,
    }))
}

//! Sign In Use Case
//!
//! Authenticates email + password and issues a bearer token.
//!
//! Unknown emails burn the same hashing cost as a real verification, so
//! response timing does not reveal which emails are registered.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use platform::password::{ClearTextPassword, PasswordHasher};

use crate::application::token_service::TokenService;
use crate::domain::repository::AccountDirectory;
use crate::domain::value_object::Email;
use crate::error::SigninError;

/// Sign in input
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

/// Sign in output
#[derive(Debug)]
pub struct SignInOutput {
    pub user_id: UserId,
    pub token: String,
}

/// Sign in use case
pub struct SignInUseCase<D>
where
    D: AccountDirectory,
{
    directory: Arc<D>,
    hasher: Arc<PasswordHasher>,
    tokens: Arc<TokenService>,
}

impl<D> SignInUseCase<D>
where
    D: AccountDirectory,
{
    pub fn new(directory: Arc<D>, hasher: Arc<PasswordHasher>, tokens: Arc<TokenService>) -> Self {
        Self {
            directory,
            hasher,
            tokens,
        }
    }

    pub async fn execute(
        &self,
        input: SignInInput,
        now: DateTime<Utc>,
    ) -> Result<SignInOutput, SigninError> {
        let Ok(password) = ClearTextPassword::new(input.password) else {
            return Err(SigninError::InvalidCredentials);
        };

        let account = match Email::new(&input.email) {
            Ok(email) => self.directory.find_by_email(&email).await?,
            Err(_) => None,
        };

        let Some(account) = account else {
            self.hasher.clone().verify_dummy_blocking(password).await;
            return Err(SigninError::InvalidCredentials);
        };

        let valid = self
            .hasher
            .clone()
            .verify_blocking(password, account.password_hash.clone())
            .await?;

        if !valid {
            return Err(SigninError::InvalidCredentials);
        }

        let token = self.tokens.issue(account.user_id, now)?;

        tracing::info!(user_id = %account.user_id, "User signed in");

        Ok(SignInOutput {
            user_id: account.user_id,
            token,
        })
    }
}

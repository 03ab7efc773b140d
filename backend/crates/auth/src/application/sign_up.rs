//! Sign Up Use Case
//!
//! Creates a new account: validate, check uniqueness, hash, persist.

use std::sync::Arc;

use platform::password::{ClearTextPassword, HashingError, PasswordHasher};

use crate::domain::entity::NewAccount;
use crate::domain::repository::AccountDirectory;
use crate::domain::value_object::{DisplayName, Email};
use crate::error::SignupError;

/// Sign up input
pub struct SignUpInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Sign up use case
pub struct SignUpUseCase<D>
where
    D: AccountDirectory,
{
    directory: Arc<D>,
    hasher: Arc<PasswordHasher>,
}

impl<D> SignUpUseCase<D>
where
    D: AccountDirectory,
{
    pub fn new(directory: Arc<D>, hasher: Arc<PasswordHasher>) -> Self {
        Self { directory, hasher }
    }

    pub async fn execute(&self, input: SignUpInput) -> Result<(), SignupError> {
        let name = DisplayName::new(&input.name).ok_or(SignupError::MissingField("name"))?;

        if input.email.trim().is_empty() {
            return Err(SignupError::MissingField("email"));
        }

        let password = match ClearTextPassword::new(input.password) {
            Ok(password) => password,
            Err(HashingError::EmptyInput) => return Err(SignupError::MissingField("password")),
            Err(e) => return Err(e.into()),
        };

        let email = Email::new(&input.email).map_err(|_| SignupError::InvalidEmail)?;

        if self.directory.find_by_email(&email).await?.is_some() {
            tracing::debug!(email_domain = %email.domain(), "Sign up with registered email");
            return Err(SignupError::EmailTaken);
        }

        let password_hash = self.hasher.clone().hash_blocking(password).await?;

        // A concurrent sign up may still win the insert; the directory reports
        // that as DuplicateEmail, which converts to EmailTaken.
        let account = self
            .directory
            .create(NewAccount {
                name,
                email,
                password_hash,
            })
            .await?;

        tracing::info!(user_id = %account.user_id, "User signed up");

        Ok(())
    }
}

//! Repository Traits
//!
//! Interfaces for data persistence. Implementations are in the infrastructure
//! layer.

use crate::domain::entity::{NewAccount, UserAccount};
use crate::domain::value_object::Email;
use crate::error::DirectoryError;

/// Account directory trait
///
/// Owns email uniqueness: `create` must fail with
/// [`DirectoryError::DuplicateEmail`] when the email is already stored, even
/// if a concurrent caller inserted it after the caller's own lookup.
#[trait_variant::make(AccountDirectory: Send)]
pub trait LocalAccountDirectory {
    /// Find an account by (normalized) email
    async fn find_by_email(&self, email: &Email) -> Result<Option<UserAccount>, DirectoryError>;

    /// Persist a new account, assigning its identifier
    async fn create(&self, account: NewAccount) -> Result<UserAccount, DirectoryError>;
}

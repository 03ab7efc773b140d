//! User Account Entity
//!
//! Created by sign up, read by sign in, never mutated. Deliberately has no
//! `Serialize` impl: the password hash must never leave the server.

use chrono::{DateTime, Utc};
use platform::password::HashedPassword;

use crate::domain::value_object::{DisplayName, Email, UserId};

/// Stored account
#[derive(Debug, Clone)]
pub struct UserAccount {
    /// Assigned by the directory on creation
    pub user_id: UserId,
    pub name: DisplayName,
    /// Unique across all accounts
    pub email: Email,
    pub password_hash: HashedPassword,
    pub created_at: DateTime<Utc>,
}

/// Validated account data awaiting persistence
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub name: DisplayName,
    pub email: Email,
    pub password_hash: HashedPassword,
}

impl NewAccount {
    /// Materialize into a stored account with a fresh identifier
    pub fn into_account(self, created_at: DateTime<Utc>) -> UserAccount {
        UserAccount {
            user_id: UserId::new(),
            name: self.name,
            email: self.email,
            password_hash: self.password_hash,
            created_at,
        }
    }
}

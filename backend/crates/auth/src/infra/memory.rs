//! In-Memory Account Directory
//!
//! Used by tests and local experiments; contents are lost on drop.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::entity::{NewAccount, UserAccount};
use crate::domain::repository::AccountDirectory;
use crate::domain::value_object::Email;
use crate::error::DirectoryError;

/// Account directory keyed by normalized email
#[derive(Clone, Default)]
pub struct InMemoryAccountDirectory {
    accounts: Arc<RwLock<HashMap<Email, UserAccount>>>,
}

impl InMemoryAccountDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }
}

impl AccountDirectory for InMemoryAccountDirectory {
    async fn find_by_email(&self, email: &Email) -> Result<Option<UserAccount>, DirectoryError> {
        Ok(self.accounts.read().await.get(email).cloned())
    }

    async fn create(&self, account: NewAccount) -> Result<UserAccount, DirectoryError> {
        let mut accounts = self.accounts.write().await;

        if accounts.contains_key(&account.email) {
            return Err(DirectoryError::DuplicateEmail);
        }

        let account = account.into_account(Utc::now());
        accounts.insert(account.email.clone(), account.clone());

        Ok(account)
    }
}

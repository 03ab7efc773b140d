//! PostgreSQL Account Directory

use chrono::{DateTime, Utc};
use platform::password::HashedPassword;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{NewAccount, UserAccount};
use crate::domain::repository::AccountDirectory;
use crate::domain::value_object::{DisplayName, Email, UserId};
use crate::error::DirectoryError;

/// SQLSTATE for unique_violation
const UNIQUE_VIOLATION: &str = "23505";

/// PostgreSQL-backed account directory
#[derive(Clone)]
pub struct PgAccountDirectory {
    pool: PgPool,
}

impl PgAccountDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl AccountDirectory for PgAccountDirectory {
    async fn find_by_email(&self, email: &Email) -> Result<Option<UserAccount>, DirectoryError> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT
                user_id,
                name,
                email,
                password_hash,
                created_at
            FROM accounts
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(AccountRow::into_account))
    }

    async fn create(&self, account: NewAccount) -> Result<UserAccount, DirectoryError> {
        let account = account.into_account(Utc::now());

        sqlx::query(
            r#"
            INSERT INTO accounts (
                user_id,
                name,
                email,
                password_hash,
                created_at
            ) VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(account.user_id.as_uuid())
        .bind(account.name.as_str())
        .bind(account.email.as_str())
        .bind(account.password_hash.as_phc_string())
        .bind(account.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.code().as_deref() == Some(UNIQUE_VIOLATION) => {
                DirectoryError::DuplicateEmail
            }
            e => DirectoryError::Database(e),
        })?;

        Ok(account)
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct AccountRow {
    user_id: Uuid,
    name: String,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl AccountRow {
    fn into_account(self) -> UserAccount {
        UserAccount {
            user_id: UserId::from_uuid(self.user_id),
            name: DisplayName::from_db(self.name),
            email: Email::from_db(self.email),
            password_hash: HashedPassword::from_stored(self.password_hash),
            created_at: self.created_at,
        }
    }
}

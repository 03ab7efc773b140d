//! PostgreSQL Post Store

use chrono::{DateTime, Utc};
use kernel::id::PostId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{BlogPost, NewPost, PostChanges};
use crate::domain::repository::PostStore;
use crate::error::BlogResult;

/// PostgreSQL-backed post store
#[derive(Clone)]
pub struct PgPostStore {
    pool: PgPool,
}

impl PgPostStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl PostStore for PgPostStore {
    async fn create(&self, post: NewPost) -> BlogResult<BlogPost> {
        let post = post.into_post(Utc::now());

        sqlx::query(
            r#"
            INSERT INTO blog_posts (
                post_id,
                title,
                description,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(post.post_id.as_uuid())
        .bind(&post.title)
        .bind(&post.description)
        .bind(post.created_at)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(post)
    }

    async fn list(&self) -> BlogResult<Vec<BlogPost>> {
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT post_id, title, description, created_at, updated_at
            FROM blog_posts
            ORDER BY created_at, post_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(PostRow::into_post).collect())
    }

    async fn find_by_id(&self, post_id: PostId) -> BlogResult<Option<BlogPost>> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT post_id, title, description, created_at, updated_at
            FROM blog_posts
            WHERE post_id = $1
            "#,
        )
        .bind(post_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(PostRow::into_post))
    }

    async fn update(&self, post_id: PostId, changes: PostChanges) -> BlogResult<Option<BlogPost>> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            UPDATE blog_posts
            SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                updated_at = $4
            WHERE post_id = $1
            RETURNING post_id, title, description, created_at, updated_at
            "#,
        )
        .bind(post_id.as_uuid())
        .bind(changes.title)
        .bind(changes.description)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(PostRow::into_post))
    }

    async fn delete(&self, post_id: PostId) -> BlogResult<bool> {
        let deleted = sqlx::query("DELETE FROM blog_posts WHERE post_id = $1")
            .bind(post_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct PostRow {
    post_id: Uuid,
    title: String,
    description: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PostRow {
    fn into_post(self) -> BlogPost {
        BlogPost {
            post_id: PostId::from_uuid(self.post_id),
            title: self.title,
            description: self.description,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

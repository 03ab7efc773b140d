//! Update Post Use Case
//!
//! Partial update: omitted fields keep their value, present fields must be
//! non-blank.

use std::sync::Arc;

use kernel::id::{PostId, UserId};

use crate::domain::entity::{BlogPost, PostChanges};
use crate::domain::repository::PostStore;
use crate::error::{BlogError, BlogResult};

/// Update post input
pub struct UpdatePostInput {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Update post use case
pub struct UpdatePostUseCase<S>
where
    S: PostStore,
{
    store: Arc<S>,
}

impl<S> UpdatePostUseCase<S>
where
    S: PostStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub async fn execute(
        &self,
        post_id: PostId,
        input: UpdatePostInput,
        editor: UserId,
    ) -> BlogResult<BlogPost> {
        let changes = PostChanges::new(input.title.as_deref(), input.description.as_deref())?;

        let post = self
            .store
            .update(post_id, changes)
            .await?
            .ok_or(BlogError::NotFound)?;

        tracing::info!(post_id = %post_id, user_id = %editor, "Blog post updated");

        Ok(post)
    }
}

//! Delete Post Use Case

use std::sync::Arc;

use kernel::id::{PostId, UserId};

use crate::domain::repository::PostStore;
use crate::error::{BlogError, BlogResult};

/// Delete post use case
pub struct DeletePostUseCase<S>
where
    S: PostStore,
{
    store: Arc<S>,
}

impl<S> DeletePostUseCase<S>
where
    S: PostStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, post_id: PostId, editor: UserId) -> BlogResult<()> {
        if !self.store.delete(post_id).await? {
            return Err(BlogError::NotFound);
        }

        tracing::info!(post_id = %post_id, user_id = %editor, "Blog post deleted");

        Ok(())
    }
}

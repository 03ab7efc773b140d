//! List / Get Post Use Cases

use std::sync::Arc;

use kernel::id::PostId;

use crate::domain::entity::BlogPost;
use crate::domain::repository::PostStore;
use crate::error::{BlogError, BlogResult};

/// Read-only post queries
pub struct ListPostsUseCase<S>
where
    S: PostStore,
{
    store: Arc<S>,
}

impl<S> ListPostsUseCase<S>
where
    S: PostStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// All posts, oldest first
    pub async fn execute(&self) -> BlogResult<Vec<BlogPost>> {
        self.store.list().await
    }

    /// One post, or `NotFound`
    pub async fn get(&self, post_id: PostId) -> BlogResult<BlogPost> {
        self.store
            .find_by_id(post_id)
            .await?
            .ok_or(BlogError::NotFound)
    }
}

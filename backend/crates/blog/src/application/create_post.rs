//! Create Post Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entity::{BlogPost, NewPost};
use crate::domain::repository::PostStore;
use crate::error::BlogResult;

/// Create post input
pub struct CreatePostInput {
    pub title: String,
    pub description: String,
}

/// Create post use case
pub struct CreatePostUseCase<S>
where
    S: PostStore,
{
    store: Arc<S>,
}

impl<S> CreatePostUseCase<S>
where
    S: PostStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, input: CreatePostInput, author: UserId) -> BlogResult<BlogPost> {
        let post = NewPost::new(&input.title, &input.description)?;
        let post = self.store.create(post).await?;

        tracing::info!(post_id = %post.post_id, user_id = %author, "Blog post created");

        Ok(post)
    }
}

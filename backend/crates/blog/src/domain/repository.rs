//! Repository Traits
//!
//! Interfaces for data persistence. Implementations are in the infrastructure
//! layer.

use kernel::id::PostId;

use crate::domain::entity::{BlogPost, NewPost, PostChanges};
use crate::error::BlogResult;

/// Blog post store trait
#[trait_variant::make(PostStore: Send)]
pub trait LocalPostStore {
    /// Persist a new post, assigning its identifier
    async fn create(&self, post: NewPost) -> BlogResult<BlogPost>;

    /// All posts, oldest first
    async fn list(&self) -> BlogResult<Vec<BlogPost>>;

    /// Find post by ID
    async fn find_by_id(&self, post_id: PostId) -> BlogResult<Option<BlogPost>>;

    /// Apply changes; `None` when no such post exists
    async fn update(&self, post_id: PostId, changes: PostChanges) -> BlogResult<Option<BlogPost>>;

    /// Delete post; `false` when no such post exists
    async fn delete(&self, post_id: PostId) -> BlogResult<bool>;
}

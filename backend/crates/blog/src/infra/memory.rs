//! In-Memory Post Store
//!
//! Used by tests and local experiments; contents are lost on drop.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use kernel::id::PostId;
use tokio::sync::RwLock;

use crate::domain::entity::{BlogPost, NewPost, PostChanges};
use crate::domain::repository::PostStore;
use crate::error::BlogResult;

#[derive(Clone, Default)]
pub struct InMemoryPostStore {
    posts: Arc<RwLock<HashMap<PostId, BlogPost>>>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PostStore for InMemoryPostStore {
    async fn create(&self, post: NewPost) -> BlogResult<BlogPost> {
        let post = post.into_post(Utc::now());
        self.posts.write().await.insert(post.post_id, post.clone());
        Ok(post)
    }

    async fn list(&self) -> BlogResult<Vec<BlogPost>> {
        let mut posts: Vec<BlogPost> = self.posts.read().await.values().cloned().collect();
        posts.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.post_id.as_uuid().cmp(b.post_id.as_uuid()))
        });
        Ok(posts)
    }

    async fn find_by_id(&self, post_id: PostId) -> BlogResult<Option<BlogPost>> {
        Ok(self.posts.read().await.get(&post_id).cloned())
    }

    async fn update(&self, post_id: PostId, changes: PostChanges) -> BlogResult<Option<BlogPost>> {
        let mut posts = self.posts.write().await;
        Ok(posts.get_mut(&post_id).map(|post| {
            post.apply(changes, Utc::now());
            post.clone()
        }))
    }

    async fn delete(&self, post_id: PostId) -> BlogResult<bool> {
        Ok(self.posts.write().await.remove(&post_id).is_some())
    }
}

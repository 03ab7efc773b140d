//! HTTP Handlers

use auth::RequestIdentity;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use kernel::id::PostId;
use std::sync::Arc;

use crate::application::{
    CreatePostInput, CreatePostUseCase, DeletePostUseCase, ListPostsUseCase, UpdatePostInput,
    UpdatePostUseCase,
};
use crate::domain::repository::PostStore;
use crate::error::{BlogError, BlogResult};
use crate::presentation::dto::{
    CreatePostRequest, MessageResponse, PostResponse, UpdatePostRequest,
};
use crate::presentation::extract::PostBody;

/// Shared state for blog handlers
pub struct BlogAppState<S>
where
    S: PostStore + Send + Sync + 'static,
{
    pub store: Arc<S>,
}

impl<S> Clone for BlogAppState<S>
where
    S: PostStore + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

/// Identifiers that are not UUIDs cannot name a post
fn parse_post_id(raw: &str) -> BlogResult<PostId> {
    raw.parse().map_err(|_| BlogError::NotFound)
}

/// GET /blogs
pub async fn list_posts<S>(State(state): State<BlogAppState<S>>) -> BlogResult<Json<Vec<PostResponse>>>
where
    S: PostStore + Send + Sync + 'static,
{
    let posts = ListPostsUseCase::new(state.store.clone()).execute().await?;
    Ok(Json(posts.into_iter().map(PostResponse::from).collect()))
}

/// GET /blogs/{id}
pub async fn get_post<S>(
    State(state): State<BlogAppState<S>>,
    Path(id): Path<String>,
) -> BlogResult<Json<PostResponse>>
where
    S: PostStore + Send + Sync + 'static,
{
    let post_id = parse_post_id(&id)?;
    let post = ListPostsUseCase::new(state.store.clone()).get(post_id).await?;
    Ok(Json(post.into()))
}

/// POST /blogs
pub async fn create_post<S>(
    State(state): State<BlogAppState<S>>,
    identity: RequestIdentity,
    PostBody(req): PostBody<CreatePostRequest>,
) -> BlogResult<(StatusCode, Json<PostResponse>)>
where
    S: PostStore + Send + Sync + 'static,
{
    let input = CreatePostInput {
        title: req.title.unwrap_or_default(),
        description: req.description.unwrap_or_default(),
    };

    let post = CreatePostUseCase::new(state.store.clone())
        .execute(input, identity.user_id)
        .await?;

    Ok((StatusCode::CREATED, Json(post.into())))
}

/// PUT /blogs/{id}
pub async fn update_post<S>(
    State(state): State<BlogAppState<S>>,
    Path(id): Path<String>,
    identity: RequestIdentity,
    PostBody(req): PostBody<UpdatePostRequest>,
) -> BlogResult<Json<PostResponse>>
where
    S: PostStore + Send + Sync + 'static,
{
    let post_id = parse_post_id(&id)?;
    let input = UpdatePostInput {
        title: req.title,
        description: req.description,
    };

    let post = UpdatePostUseCase::new(state.store.clone())
        .execute(post_id, input, identity.user_id)
        .await?;

    Ok(Json(post.into()))
}

/// DELETE /blogs/{id}
pub async fn delete_post<S>(
    State(state): State<BlogAppState<S>>,
    Path(id): Path<String>,
    identity: RequestIdentity,
) -> BlogResult<Json<MessageResponse>>
where
    S: PostStore + Send + Sync + 'static,
{
    let post_id = parse_post_id(&id)?;

    DeletePostUseCase::new(state.store.clone())
        .execute(post_id, identity.user_id)
        .await?;

    Ok(Json(MessageResponse {
        message: "Blog deleted successfully".to_string(),
    }))
}

//! Blog Router

use auth::{TokenService, require_bearer};
use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post, put},
};
use std::sync::Arc;

use crate::domain::repository::PostStore;
use crate::presentation::handlers::{self, BlogAppState};

/// Create the Blog router for any store
///
/// Reads are public; writes require a bearer token verified by `tokens`.
pub fn blog_router<S>(store: Arc<S>, tokens: Arc<TokenService>) -> Router
where
    S: PostStore + Send + Sync + 'static,
{
    let state = BlogAppState { store };

    let public = Router::new()
        .route("/blogs", get(handlers::list_posts::<S>))
        .route("/blogs/{id}", get(handlers::get_post::<S>));

    let protected = Router::new()
        .route("/blogs", post(handlers::create_post::<S>))
        .route(
            "/blogs/{id}",
            put(handlers::update_post::<S>).delete(handlers::delete_post::<S>),
        )
        .route_layer(from_fn_with_state(tokens, require_bearer));

    public.merge(protected).with_state(state)
}

//! Router Composition

use std::sync::Arc;

use auth::{TokenService, auth_router, domain::repository::AccountDirectory};
use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::get,
};
use blog::{blog_router, domain::repository::PostStore};
use platform::password::PasswordHasher;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;

/// Root banner text
pub const BANNER: &str = "Blog backend with authentication is running";

/// GET /
async fn banner() -> &'static str {
    BANNER
}

/// Build the full application router
pub fn build_app<D, S>(
    directory: Arc<D>,
    posts: Arc<S>,
    hasher: Arc<PasswordHasher>,
    tokens: Arc<TokenService>,
    allowed_origins: Vec<HeaderValue>,
) -> Router
where
    D: AccountDirectory + Send + Sync + 'static,
    S: PostStore + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(banner))
        .merge(auth_router(directory, hasher, tokens.clone()))
        .merge(blog_router(posts, tokens))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(allowed_origins))
}

fn cors_layer(allowed_origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
}

//! Blog Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Blog post entity and the post store trait
//! - `application/` - CRUD use cases
//! - `infra/` - PostgreSQL and in-memory stores
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! Reads are public. Create, update and delete sit behind
//! [`auth::require_bearer`].

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use domain::entity::BlogPost;
pub use error::{BlogError, BlogResult};
pub use infra::{InMemoryPostStore, PgPostStore};
pub use presentation::router::blog_router;

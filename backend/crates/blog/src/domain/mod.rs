//! Domain Layer
//!
//! Contains the blog post entity and the store trait.

pub mod entity;
pub mod repository;

// Re-exports
pub use entity::{BlogPost, NewPost, PostChanges};
pub use repository::PostStore;

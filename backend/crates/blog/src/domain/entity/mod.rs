//! Entities

pub mod blog_post;

pub use blog_post::{BlogPost, NewPost, PostChanges};

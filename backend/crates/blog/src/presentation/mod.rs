//! Presentation Layer
//!
//! HTTP handlers, DTOs and router.

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod router;

pub use handlers::BlogAppState;
pub use router::blog_router;

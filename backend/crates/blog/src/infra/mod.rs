//! Infrastructure Layer
//!
//! Database implementations of the post store.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryPostStore;
pub use postgres::PgPostStore;

//! Infrastructure Layer
//!
//! Database implementations of the domain repositories.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryAccountDirectory;
pub use postgres::PgAccountDirectory;

//! Value Objects
//!
//! Immutable, self-validating domain primitives.

pub mod display_name;
pub mod email;

pub use display_name::DisplayName;
pub use email::{Email, EmailError};
pub use kernel::id::UserId;

//! Shared Kernel - Vocabulary shared by every backend crate
//!
//! Only the pieces whose meaning is identical across the auth and blog
//! domains live here:
//! - Typed identifiers ([`id::Id`])
//! - The unified application error ([`error::app_error::AppError`]) and its
//!   HTTP classification ([`error::kind::ErrorKind`])

pub mod error {
    pub mod app_error;
    pub mod kind;
    #[cfg(feature = "axum")]
    pub mod response;
}
pub mod id;

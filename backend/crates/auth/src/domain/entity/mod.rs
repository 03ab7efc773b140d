//! Entities

pub mod request_identity;
pub mod user_account;

pub use request_identity::RequestIdentity;
pub use user_account::{NewAccount, UserAccount};

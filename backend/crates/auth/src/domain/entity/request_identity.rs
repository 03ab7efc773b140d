//! Request Identity
//!
//! The account resolved from a verified bearer token. Lives in the request
//! extensions for the duration of one request.

use crate::domain::value_object::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestIdentity {
    pub user_id: UserId,
}

impl RequestIdentity {
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }
}

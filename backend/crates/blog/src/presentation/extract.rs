//! JSON body extractor

use axum::extract::FromRequest;

use crate::error::BlogError;

/// JSON body of a post write; unreadable bodies become [`BlogError::InvalidBody`]
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(BlogError))]
pub struct PostBody<T>(pub T);

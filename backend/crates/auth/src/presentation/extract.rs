//! JSON body extractors
//!
//! Wrap `axum::Json` so that unreadable bodies (bad syntax, wrong field types,
//! missing content type) are rejected with the route's own 400 error instead
//! of axum's plain-text 4xx.

use axum::extract::FromRequest;

use crate::error::{SigninError, SignupError};

/// JSON body of a sign up request
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(SignupError))]
pub struct SignUpBody<T>(pub T);

/// JSON body of a sign in request
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(SigninError))]
pub struct SignInBody<T>(pub T);

//! API DTOs (Data Transfer Objects)
//!
//! Request fields are optional: an absent key and an explicit `null` both
//! reach the use cases as empty strings, which report them as missing.

use serde::{Deserialize, Serialize};

// ============================================================================
// Sign Up
// ============================================================================

/// Sign up request
#[derive(Clone, Deserialize)]
pub struct SignUpRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Sign up response
#[derive(Debug, Clone, Serialize)]
pub struct SignUpResponse {
    pub message: String,
}

// ============================================================================
// Sign In
// ============================================================================

/// Sign in request
#[derive(Clone, Deserialize)]
pub struct SignInRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Sign in response
#[derive(Debug, Clone, Serialize)]
pub struct SignInResponse {
    pub message: String,
    pub token: String,
}

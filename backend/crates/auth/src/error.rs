//! Auth Error Types
//!
//! Auth-specific error enums that integrate with the unified
//! `kernel::error::AppError` system. Server-side causes are logged and
//! replaced by a generic message before they reach the response body.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::password::HashingError;
use thiserror::Error;

/// Detail sent to clients for every 5xx response
const INTERNAL_DETAIL: &str = "Internal server error";

// ============================================================================
// Request authentication
// ============================================================================

/// Failure to authenticate a request from its bearer token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No usable `Authorization: Bearer <token>` header
    #[error("Authentication required")]
    MissingToken,

    /// Token is not a well-formed signed token
    #[error("Malformed token")]
    Malformed,

    /// Signature does not match the server secret
    #[error("Invalid token signature")]
    InvalidSignature,

    /// Token lifetime has elapsed
    #[error("Token expired")]
    Expired,
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingToken => StatusCode::UNAUTHORIZED,
            AuthError::Malformed | AuthError::InvalidSignature | AuthError::Expired => {
                StatusCode::FORBIDDEN
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::MissingToken => ErrorKind::Unauthorized,
            AuthError::Malformed | AuthError::InvalidSignature | AuthError::Expired => {
                ErrorKind::Forbidden
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let err = AppError::new(self.kind(), self.to_string());
        match self {
            AuthError::MissingToken => err.with_action("Sign in and send the token as a Bearer header"),
            AuthError::Expired => err.with_action("Sign in again"),
            _ => err,
        }
    }

    fn log(&self) {
        match self {
            AuthError::InvalidSignature => {
                tracing::warn!("Rejected token with invalid signature");
            }
            _ => {
                tracing::debug!(error = %self, "Request authentication failed");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

// ============================================================================
// Token encoding
// ============================================================================

/// Failure to produce a token
#[derive(Debug, Error)]
pub enum TokenError {
    /// Claims could not be serialized
    #[error("Failed to encode token claims: {0}")]
    Encoding(#[from] serde_json::Error),
}

// ============================================================================
// Account directory
// ============================================================================

/// Account storage failure
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// An account with the email already exists
    #[error("Email already registered")]
    DuplicateEmail,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

// ============================================================================
// Sign up
// ============================================================================

/// Sign up failure
#[derive(Debug, Error)]
pub enum SignupError {
    /// A required field was absent or empty
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Body was not a JSON object of string fields
    #[error("Invalid request body")]
    InvalidBody,

    /// Email failed the structural check
    #[error("Invalid email address")]
    InvalidEmail,

    /// An account with the email already exists
    #[error("Email already registered")]
    EmailTaken,

    /// Password hashing failed
    #[error("Password hashing failed: {0}")]
    Hashing(#[from] HashingError),

    /// Account storage failed
    #[error("Account directory error: {0}")]
    Directory(DirectoryError),
}

impl From<DirectoryError> for SignupError {
    fn from(err: DirectoryError) -> Self {
        match err {
            DirectoryError::DuplicateEmail => SignupError::EmailTaken,
            other => SignupError::Directory(other),
        }
    }
}

impl From<JsonRejection> for SignupError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "Unreadable sign up body");
        SignupError::InvalidBody
    }
}

impl SignupError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            SignupError::MissingField(_)
            | SignupError::InvalidBody
            | SignupError::InvalidEmail
            | SignupError::EmailTaken => StatusCode::BAD_REQUEST,
            SignupError::Hashing(_) | SignupError::Directory(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            SignupError::MissingField(_)
            | SignupError::InvalidBody
            | SignupError::InvalidEmail
            | SignupError::EmailTaken => ErrorKind::BadRequest,
            SignupError::Hashing(_) | SignupError::Directory(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        if self.kind().is_server_error() {
            AppError::internal(INTERNAL_DETAIL)
        } else {
            AppError::new(self.kind(), self.to_string())
        }
    }

    fn log(&self) {
        match self {
            SignupError::Hashing(e) => {
                tracing::error!(error = %e, "Sign up hashing error");
            }
            SignupError::Directory(e) => {
                tracing::error!(error = %e, "Sign up directory error");
            }
            _ => {
                tracing::debug!(error = %self, "Sign up rejected");
            }
        }
    }
}

impl IntoResponse for SignupError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

// ============================================================================
// Sign in
// ============================================================================

/// Sign in failure
#[derive(Debug, Error)]
pub enum SigninError {
    /// Unknown email or wrong password (deliberately indistinguishable)
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Password verification failed
    #[error("Password verification failed: {0}")]
    Hashing(#[from] HashingError),

    /// Account lookup failed
    #[error("Account directory error: {0}")]
    Directory(#[from] DirectoryError),

    /// Token could not be produced
    #[error("Token encoding failed: {0}")]
    TokenEncoding(#[from] TokenError),
}

// An unreadable body carries no usable credentials
impl From<JsonRejection> for SigninError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "Unreadable sign in body");
        SigninError::InvalidCredentials
    }
}

impl SigninError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            SigninError::InvalidCredentials => StatusCode::BAD_REQUEST,
            SigninError::Hashing(_) | SigninError::Directory(_) | SigninError::TokenEncoding(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            SigninError::InvalidCredentials => ErrorKind::BadRequest,
            SigninError::Hashing(_) | SigninError::Directory(_) | SigninError::TokenEncoding(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        if self.kind().is_server_error() {
            AppError::internal(INTERNAL_DETAIL)
        } else {
            AppError::new(self.kind(), self.to_string())
        }
    }

    fn log(&self) {
        match self {
            SigninError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            SigninError::Hashing(e) => {
                tracing::error!(error = %e, "Sign in hashing error");
            }
            SigninError::Directory(e) => {
                tracing::error!(error = %e, "Sign in directory error");
            }
            SigninError::TokenEncoding(e) => {
                tracing::error!(error = %e, "Sign in token error");
            }
        }
    }
}

impl IntoResponse for SigninError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Startup configuration failure
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Signing secret is absent or empty
    #[error("JWT_SECRET must be set to a non-empty value")]
    MissingSecret,

    /// A variable could not be parsed
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },

    /// Hashing parameters were rejected
    #[error("Invalid password hashing configuration: {0}")]
    InvalidHashing(#[from] HashingError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_status() {
        assert_eq!(AuthError::MissingToken.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AuthError::Malformed.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(AuthError::InvalidSignature.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(AuthError::Expired.status_code(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_duplicate_email_becomes_email_taken() {
        let err = SignupError::from(DirectoryError::DuplicateEmail);
        assert!(matches!(err, SignupError::EmailTaken));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_server_errors_hide_cause() {
        let err = SignupError::Directory(DirectoryError::Database(sqlx::Error::PoolTimedOut));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let app = err.to_app_error();
        assert_eq!(app.message(), INTERNAL_DETAIL);
        assert!(app.is_server_error());
    }

    #[test]
    fn test_invalid_credentials_is_bad_request() {
        let err = SigninError::InvalidCredentials;
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_app_error().message(), "Invalid credentials");
    }
}

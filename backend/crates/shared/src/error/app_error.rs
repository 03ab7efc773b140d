//! Application Error - the error every HTTP response is rendered from
//!
//! Domain crates keep their own `thiserror` enums and convert into
//! [`AppError`] at the presentation boundary. Internal causes are logged by
//! the domain error before conversion and never reach this type.

use std::borrow::Cow;
use std::fmt;

use super::kind::ErrorKind;

/// アプリケーション統一エラー型
///
/// ## Fields
/// * `kind` - HTTP ステータスに対応する分類
/// * `message` - クライアントに返すメッセージ（内部情報を含めないこと）
/// * `action` - クライアントが取るべき行動（任意）
///
/// ## Examples
/// ```rust
/// use kernel::error::{app_error::AppError, kind::ErrorKind};
///
/// let err = AppError::new(ErrorKind::BadRequest, "Title is required")
///     .with_action("Provide a non-empty title");
/// assert_eq!(err.status_code(), 400);
/// ```
#[derive(Debug, Clone)]
pub struct AppError {
    kind: ErrorKind,
    message: Cow<'static, str>,
    action: Option<Cow<'static, str>>,
}

/// `Result<T, AppError>` の省略形
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            action: None,
        }
    }

    /// 500 - メッセージは汎用文言にすること
    pub fn internal(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::InternalServerError, message)
    }

    /// クライアント向けのアクションを設定
    pub fn with_action(self, action: impl Into<Cow<'static, str>>) -> Self {
        Self {
            action: Some(action.into()),
            ..self
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    pub fn is_server_error(&self) -> bool {
        self.kind.is_server_error()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.action {
            Some(action) => write!(f, "[{}] {} (Action: {action})", self.kind, self.message),
            None => write!(f, "[{}] {}", self.kind, self.message),
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_error() {
        let err = AppError::new(ErrorKind::NotFound, "Blog not found");
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.message(), "Blog not found");
        assert!(err.action().is_none());
        assert!(!err.is_server_error());
    }

    #[test]
    fn test_internal() {
        let err = AppError::internal("Internal server error");
        assert_eq!(err.status_code(), 500);
        assert!(err.is_server_error());
    }

    #[test]
    fn test_display_with_action() {
        let err = AppError::new(ErrorKind::Unauthorized, "No token provided")
            .with_action("Send an Authorization: Bearer header");
        assert_eq!(
            err.to_string(),
            "[Unauthorized] No token provided (Action: Send an Authorization: Bearer header)"
        );
    }
}

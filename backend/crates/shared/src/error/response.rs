//! Axum integration - renders [`AppError`] as an RFC 7807 problem document

use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;

use super::app_error::AppError;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = serde_json::json!({
            "type": format!("https://httpstatuses.io/{}", self.status_code()),
            "title": self.kind().as_str(),
            "status": self.status_code(),
            "detail": self.message(),
            "action": self.action(),
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::kind::ErrorKind;

    #[test]
    fn test_status_is_preserved() {
        let response = AppError::new(ErrorKind::Forbidden, "Invalid token").into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let response = AppError::internal("Internal server error").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

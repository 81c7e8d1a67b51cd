use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use shared::api::error::ApiError;
use tracing::{debug, error};

use crate::store::StoreError;

pub struct AppError {
    pub code: StatusCode,
    pub message: String,
}

impl AppError {
    /// Return a plain text response error message
    pub fn new<S: Into<String>>(code: StatusCode, message: S) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found() -> Self {
        AppError::new(StatusCode::NOT_FOUND, "not found")
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AppError {}: {}", self.code, self.message)
    }
}

// Render AppError into a response
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.code.is_server_error() {
            error!(code = %self.code, message = self.message, "request failed");
        } else {
            debug!(code = %self.code, message = self.message, "request rejected");
        }
        (self.code, self.message).into_response()
    }
}

impl From<ApiError> for AppError {
    fn from(err: ApiError) -> Self {
        AppError::new(err.status_code(), err.to_string())
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        ApiError::from(err).into()
    }
}

#[cfg(test)]
mod test {
    use axum::{http::StatusCode, response::IntoResponse};
    use shared::api::error::ApiError;

    use super::AppError;

    #[test]
    fn test_api_errors_keep_status_and_message() {
        let err = AppError::from(ApiError::missing("username"));
        assert_eq!(err.code, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "You need to enter a username");

        let err = AppError::from(ApiError::unknown_user());
        assert_eq!(err.code, StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_responses_are_plain_text() {
        let response = AppError::not_found().into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers()["content-type"],
            mime::TEXT_PLAIN_UTF_8.as_ref()
        );
    }
}

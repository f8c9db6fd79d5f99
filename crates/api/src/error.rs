use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use marquee_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// [`IntoResponse`] is the only place an error is turned into the
/// `{ message, error_code, status_code }` body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `marquee_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// No route matches the request path.
    #[error("Not Found")]
    RouteNotFound,

    /// The path exists but not for this HTTP method.
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    /// The request did not finish within the configured timeout.
    #[error("Request Timeout")]
    RequestTimeout,

    /// Anything unclassified. The detail is logged, never returned.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Status code, application error code and client-facing message.
    fn parts(&self) -> (StatusCode, u16, String) {
        match self {
            AppError::Core(core) => {
                let status = StatusCode::from_u16(core.status_code())
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                (status, core.error_code(), core.to_string())
            }
            AppError::RouteNotFound => (StatusCode::NOT_FOUND, 404, self.to_string()),
            AppError::MethodNotAllowed => {
                (StatusCode::METHOD_NOT_ALLOWED, 405, self.to_string())
            }
            AppError::RequestTimeout => (StatusCode::REQUEST_TIMEOUT, 408, self.to_string()),
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Unhandled error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    500,
                    "Internal Server Error".to_string(),
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = self.parts();

        if let AppError::Core(CoreError::InvalidInput { field }) = &self {
            tracing::debug!(field, "Rejected invalid input");
        }

        let body = json!({
            "message": message,
            "error_code": error_code,
            "status_code": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}

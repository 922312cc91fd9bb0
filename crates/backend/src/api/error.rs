use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::shared::error::{FetchErrorResponse, NotFoundResponse};

use crate::reports::sales::DataAccessError;

/// Store failure caught at a route boundary
///
/// Rendered as `500 {message, error}`; the cause is logged server-side and
/// also sent back as a `{kind, detail}` object.
#[derive(Debug)]
pub struct ReportError {
    pub message: &'static str,
    pub source: DataAccessError,
}

impl ReportError {
    pub fn new(message: &'static str, source: DataAccessError) -> Self {
        Self { message, source }
    }
}

impl IntoResponse for ReportError {
    fn into_response(self) -> Response {
        tracing::error!("{}: {}", self.message, self.source);
        let body = FetchErrorResponse {
            message: self.message.to_string(),
            error: self.source.to_cause(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

/// Uniform 404 for unmatched API paths
pub async fn not_found() -> (StatusCode, Json<NotFoundResponse>) {
    (StatusCode::NOT_FOUND, Json(NotFoundResponse::default()))
}

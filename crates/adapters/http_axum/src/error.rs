//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use shopfront_domain::error::ShopfrontError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`ShopfrontError`] and body rejections to an HTTP response with an
/// appropriate status code.
pub enum ApiError {
    /// Failure reported by a service.
    Domain(ShopfrontError),
    /// The request body was not acceptable JSON for the endpoint.
    Body(JsonRejection),
}

impl From<ShopfrontError> for ApiError {
    fn from(err: ShopfrontError) -> Self {
        Self::Domain(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Body(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Domain(ShopfrontError::Validation(err)) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            Self::Domain(ShopfrontError::NotFound(err)) => (StatusCode::NOT_FOUND, err.to_string()),
            Self::Domain(ShopfrontError::Storage(err)) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            Self::Body(rejection) => (rejection.status(), rejection.body_text()),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use pizzeria_domain::error::{PizzeriaError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// JSON body for domain-rule violations, one message per failed rule.
#[derive(Serialize)]
struct ErrorsBody {
    errors: Vec<String>,
}

/// Maps [`PizzeriaError`] to an HTTP response with appropriate status code.
///
/// Domain-rule violations (the price range) use the `errors` array
/// envelope; every other failure uses the single-`error` envelope.
pub struct ApiError(PizzeriaError);

impl From<PizzeriaError> for ApiError {
    fn from(err: PizzeriaError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self.0 {
            PizzeriaError::Validation(err @ ValidationError::PriceOutOfRange) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorsBody {
                    errors: vec![err.to_string()],
                }),
            )
                .into_response(),
            PizzeriaError::Validation(err) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: err.to_string(),
                }),
            )
                .into_response(),
            PizzeriaError::NotFound(err) => (
                StatusCode::NOT_FOUND,
                Json(ErrorBody {
                    error: err.to_string(),
                }),
            )
                .into_response(),
            PizzeriaError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        error: err.to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

/// Error mapping for the offering write path.
///
/// Identical to [`ApiError`] except that storage failures (e.g. a dangling
/// pizza foreign key) map to 400 instead of 500 on this path.
pub struct WriteError(PizzeriaError);

impl From<PizzeriaError> for WriteError {
    fn from(err: PizzeriaError) -> Self {
        Self(err)
    }
}

impl IntoResponse for WriteError {
    fn into_response(self) -> Response {
        match self.0 {
            PizzeriaError::Storage(err) => {
                tracing::error!(error = %err, "storage error during write");
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorBody {
                        error: err.to_string(),
                    }),
                )
                    .into_response()
            }
            other => ApiError::from(other).into_response(),
        }
    }
}

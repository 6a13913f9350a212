use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::Serialize;

/// Structured error response returned by all endpoints on failure.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    /// Human-readable error description.
    #[schema(example = "Student is already registered for this event")]
    pub error: String,
    /// Machine-readable error code. One of: `VALIDATION_ERROR`, `RANGE_ERROR`,
    /// `CONFLICT`, `NOT_FOUND`, `UNAUTHENTICATED`, `STORE_ERROR`.
    #[schema(example = "CONFLICT")]
    pub code: &'static str,
}

/// Application-level error type.
#[derive(Debug)]
pub enum AppError {
    /// Missing or malformed required field.
    Validation(String),
    /// A numeric field outside its allowed range.
    Range(String),
    /// Uniqueness violation.
    Conflict(String),
    NotFound(String),
    /// The current student could not be resolved from the request.
    Unauthenticated,
    /// Unclassified backing-store failure.
    Store(String),
}

impl AppError {
    fn status_and_body(self) -> (StatusCode, ErrorBody) {
        match self {
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: msg,
                    code: "VALIDATION_ERROR",
                },
            ),
            AppError::Range(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: msg,
                    code: "RANGE_ERROR",
                },
            ),
            AppError::Conflict(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: msg,
                    code: "CONFLICT",
                },
            ),
            AppError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    error: msg,
                    code: "NOT_FOUND",
                },
            ),
            AppError::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                ErrorBody {
                    error: "Student identity required".into(),
                    code: "UNAUTHENTICATED",
                },
            ),
            AppError::Store(detail) => {
                tracing::error!("Store error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        error: detail,
                        code: "STORE_ERROR",
                    },
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();
        (status, Json(body)).into_response()
    }
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        AppError::Store(err.to_string())
    }
}

use serde::Serialize;

use crate::error::AppError;

/// Plain acknowledgement body.
#[derive(Serialize, utoipa::ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Event deleted successfully")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Unwrap a required field, failing with a validation error that names it.
pub fn require<T>(value: Option<T>, field: &str) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::Validation(format!("Missing required field: {field}")))
}

/// Unwrap a required text field; blank strings count as missing.
pub fn require_text(value: Option<String>, field: &str) -> Result<String, AppError> {
    let value = require(value, field)?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(format!(
            "Missing required field: {field}"
        )));
    }
    Ok(trimmed.to_string())
}

/// Unwrap a required entity id (must be positive).
pub fn require_id(value: Option<i32>, field: &str) -> Result<i32, AppError> {
    let id = require(value, field)?;
    if id <= 0 {
        return Err(AppError::Validation(format!(
            "{field} must be a positive integer"
        )));
    }
    Ok(id)
}

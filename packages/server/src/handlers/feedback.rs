use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::models::feedback::*;
use crate::models::shared::MessageResponse;
use crate::state::AppState;
use crate::store;

#[utoipa::path(
    post,
    path = "/feedback",
    tag = "Feedback",
    operation_id = "submitFeedback",
    summary = "Submit feedback for an event",
    description = "Rating must be an integer from 1 to 5. One submission per student per event.",
    request_body = SubmitFeedbackRequest,
    responses(
        (status = 201, description = "Feedback submitted", body = MessageResponse),
        (status = 400, description = "Validation error, rating out of range or duplicate (VALIDATION_ERROR, RANGE_ERROR, CONFLICT)", body = ErrorBody),
        (status = 404, description = "Student or event not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(student_id = ?payload.student_id, event_id = ?payload.event_id))]
pub async fn submit_feedback(
    State(state): State<AppState>,
    AppJson(payload): AppJson<SubmitFeedbackRequest>,
) -> Result<impl IntoResponse, AppError> {
    let new_feedback = validate_submit_feedback(payload)?;
    store::feedback::submit_feedback(&state.db, new_feedback).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Feedback submitted successfully")),
    ))
}

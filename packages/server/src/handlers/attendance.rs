use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::models::attendance::*;
use crate::models::shared::MessageResponse;
use crate::state::AppState;
use crate::store;

#[utoipa::path(
    post,
    path = "/attendance",
    tag = "Attendance",
    operation_id = "markAttendance",
    summary = "Mark attendance (self-service)",
    description = "Records `present` or `absent` for a student at an event. A second record for the same pair is rejected; staff use `POST /staff/attendance` to change a status.",
    request_body = MarkAttendanceRequest,
    responses(
        (status = 201, description = "Attendance marked", body = MessageResponse),
        (status = 400, description = "Validation error or already marked (VALIDATION_ERROR, CONFLICT)", body = ErrorBody),
        (status = 404, description = "Student or event not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(student_id = ?payload.student_id, event_id = ?payload.event_id))]
pub async fn mark_attendance(
    State(state): State<AppState>,
    AppJson(payload): AppJson<MarkAttendanceRequest>,
) -> Result<impl IntoResponse, AppError> {
    let record = validate_mark_attendance(&payload)?;
    store::attendance::mark_attendance(&state.db, record).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Attendance marked successfully")),
    ))
}

#[utoipa::path(
    get,
    path = "/attendance",
    tag = "Attendance",
    operation_id = "listAttendance",
    summary = "List attendance records",
    description = "Every attendance record with its event details, newest first.",
    responses(
        (status = 200, description = "List of attendance records", body = Vec<AttendanceListItem>),
    ),
)]
#[instrument(skip(state))]
pub async fn list_attendance(
    State(state): State<AppState>,
) -> Result<Json<Vec<AttendanceListItem>>, AppError> {
    Ok(Json(store::attendance::list_attendance(&state.db).await?))
}

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::{info, instrument};

use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::extractors::params::AppPath;
use crate::models::attendance::{MarkAttendanceRequest, RosterAttendance, validate_mark_attendance};
use crate::models::event::StaffEventItem;
use crate::models::feedback::StaffFeedbackItem;
use crate::models::registration::RosterRegistration;
use crate::models::shared::MessageResponse;
use crate::state::AppState;
use crate::store;

#[utoipa::path(
    get,
    path = "/staff/events",
    tag = "Staff",
    operation_id = "staffListEvents",
    summary = "Events with registration counts",
    responses(
        (status = 200, description = "Events ordered by date", body = Vec<StaffEventItem>),
    ),
)]
#[instrument(skip(state))]
pub async fn list_events(
    State(state): State<AppState>,
) -> Result<Json<Vec<StaffEventItem>>, AppError> {
    Ok(Json(store::event::list_events_with_counts(&state.db).await?))
}

#[utoipa::path(
    get,
    path = "/staff/registrations/{event_id}",
    tag = "Staff",
    operation_id = "staffEventRegistrations",
    summary = "Students registered for an event",
    params(("event_id" = i32, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Registrations in registration order", body = Vec<RosterRegistration>),
    ),
)]
#[instrument(skip(state), fields(event_id))]
pub async fn event_registrations(
    State(state): State<AppState>,
    AppPath(event_id): AppPath<i32>,
) -> Result<Json<Vec<RosterRegistration>>, AppError> {
    Ok(Json(
        store::registration::event_roster(&state.db, event_id).await?,
    ))
}

#[utoipa::path(
    post,
    path = "/staff/attendance",
    tag = "Staff",
    operation_id = "staffMarkAttendance",
    summary = "Mark or correct attendance",
    description = "Sets the attendance status for a student at an event, overwriting any earlier status.",
    request_body = MarkAttendanceRequest,
    responses(
        (status = 201, description = "Attendance recorded", body = MessageResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Student or event not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(student_id = ?payload.student_id, event_id = ?payload.event_id))]
pub async fn mark_attendance(
    State(state): State<AppState>,
    AppJson(payload): AppJson<MarkAttendanceRequest>,
) -> Result<impl IntoResponse, AppError> {
    let record = validate_mark_attendance(&payload)?;
    let model = store::attendance::upsert_attendance(&state.db, record).await?;
    info!(attendance_id = model.id, status = %model.status, "Attendance recorded by staff");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Attendance marked successfully")),
    ))
}

#[utoipa::path(
    get,
    path = "/staff/attendance/{event_id}",
    tag = "Staff",
    operation_id = "staffEventAttendance",
    summary = "Attendance records for an event",
    params(("event_id" = i32, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Attendance in recording order", body = Vec<RosterAttendance>),
    ),
)]
#[instrument(skip(state), fields(event_id))]
pub async fn event_attendance(
    State(state): State<AppState>,
    AppPath(event_id): AppPath<i32>,
) -> Result<Json<Vec<RosterAttendance>>, AppError> {
    Ok(Json(
        store::attendance::event_attendance(&state.db, event_id).await?,
    ))
}

#[utoipa::path(
    get,
    path = "/staff/feedback",
    tag = "Staff",
    operation_id = "staffListFeedback",
    summary = "All feedback",
    description = "Every feedback entry with event and student details, newest first.",
    responses(
        (status = 200, description = "Feedback", body = Vec<StaffFeedbackItem>),
    ),
)]
#[instrument(skip(state))]
pub async fn list_feedback(
    State(state): State<AppState>,
) -> Result<Json<Vec<StaffFeedbackItem>>, AppError> {
    Ok(Json(store::feedback::list_feedback(&state.db).await?))
}

use axum::Json;
use axum::extract::State;
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::params::AppPath;
use crate::models::report::*;
use crate::state::AppState;
use crate::store;

#[utoipa::path(
    get,
    path = "/reports/registrations",
    tag = "Reports",
    operation_id = "registrationsReport",
    summary = "Registrations per event",
    description = "Registration count for every event, including events nobody registered for, highest first.",
    responses(
        (status = 200, description = "Registrations per event", body = Vec<RegistrationReportRow>),
    ),
)]
#[instrument(skip(state))]
pub async fn registrations(
    State(state): State<AppState>,
) -> Result<Json<Vec<RegistrationReportRow>>, AppError> {
    Ok(Json(store::report::registrations_per_event(&state.db).await?))
}

#[utoipa::path(
    get,
    path = "/reports/attendance",
    tag = "Reports",
    operation_id = "attendanceReport",
    summary = "Attendance percentage per event",
    description = "Registered and present counts with `attendance_percentage` (0 when nobody registered), highest percentage first.",
    responses(
        (status = 200, description = "Attendance per event", body = Vec<AttendanceReportRow>),
    ),
)]
#[instrument(skip(state))]
pub async fn attendance(
    State(state): State<AppState>,
) -> Result<Json<Vec<AttendanceReportRow>>, AppError> {
    Ok(Json(store::report::attendance_per_event(&state.db).await?))
}

#[utoipa::path(
    get,
    path = "/reports/feedback",
    tag = "Reports",
    operation_id = "feedbackReport",
    summary = "Average feedback score per event",
    description = "Mean rating per event (null without feedback), highest first.",
    responses(
        (status = 200, description = "Average feedback per event", body = Vec<FeedbackReportRow>),
    ),
)]
#[instrument(skip(state))]
pub async fn feedback(
    State(state): State<AppState>,
) -> Result<Json<Vec<FeedbackReportRow>>, AppError> {
    Ok(Json(store::report::feedback_per_event(&state.db).await?))
}

#[utoipa::path(
    get,
    path = "/reports/event_analysis",
    tag = "Reports",
    operation_id = "eventAnalysisReport",
    summary = "Per-event registration, attendance and feedback analysis",
    description = "One row per event, latest event date first.",
    responses(
        (status = 200, description = "Event analysis", body = Vec<EventAnalysisRow>),
    ),
)]
#[instrument(skip(state))]
pub async fn event_analysis(
    State(state): State<AppState>,
) -> Result<Json<Vec<EventAnalysisRow>>, AppError> {
    Ok(Json(store::report::event_analysis(&state.db).await?))
}

#[utoipa::path(
    get,
    path = "/reports/student_analysis/{id}",
    tag = "Reports",
    operation_id = "studentAnalysisReport",
    summary = "Attendance and feedback analysis for one student",
    params(("id" = i32, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Student analysis", body = StudentAnalysis),
        (status = 404, description = "Student not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id))]
pub async fn student_analysis(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<StudentAnalysis>, AppError> {
    Ok(Json(store::report::student_analysis(&state.db, id).await?))
}

#[utoipa::path(
    get,
    path = "/reports/student_participation/{id}",
    tag = "Reports",
    operation_id = "studentParticipationReport",
    summary = "Events a student attended",
    description = "Names of the events the student was marked present at, in one row.",
    params(("id" = i32, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Attended events", body = StudentParticipationReport),
        (status = 404, description = "No participation (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id))]
pub async fn student_participation(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<StudentParticipationReport>, AppError> {
    Ok(Json(store::report::student_participation(&state.db, id).await?))
}

#[utoipa::path(
    get,
    path = "/reports/top_students",
    tag = "Reports",
    operation_id = "topStudentsReport",
    summary = "Three most active students",
    description = "Students ranked by number of events attended; ties go to the lower student id.",
    responses(
        (status = 200, description = "Top students", body = Vec<TopStudentRow>),
    ),
)]
#[instrument(skip(state))]
pub async fn top_students(
    State(state): State<AppState>,
) -> Result<Json<Vec<TopStudentRow>>, AppError> {
    Ok(Json(store::report::top_students(&state.db).await?))
}

#[utoipa::path(
    get,
    path = "/reports/events_by_type/{event_type}",
    tag = "Reports",
    operation_id = "eventsByTypeReport",
    summary = "Events of one type",
    description = "Events whose type matches exactly, soonest first.",
    params(("event_type" = String, Path, description = "Event type, e.g. `workshop`")),
    responses(
        (status = 200, description = "Matching events", body = Vec<EventsByTypeRow>),
    ),
)]
#[instrument(skip(state))]
pub async fn events_by_type(
    State(state): State<AppState>,
    AppPath(event_type): AppPath<String>,
) -> Result<Json<Vec<EventsByTypeRow>>, AppError> {
    Ok(Json(
        store::report::events_by_type(&state.db, &event_type).await?,
    ))
}

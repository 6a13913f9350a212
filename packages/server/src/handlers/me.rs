use axum::Json;
use axum::extract::State;
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::identity::CurrentStudent;
use crate::extractors::params::AppQuery;
use crate::models::feedback::StudentFeedbackItem;
use crate::models::student::{ParticipationItem, ParticipationQuery};
use crate::state::AppState;
use crate::store;

#[utoipa::path(
    get,
    path = "/student/participation",
    tag = "Student",
    operation_id = "myParticipation",
    summary = "The current student's registrations",
    description = "Registrations of the current student with attendance status and whether feedback was given, newest first.",
    params(ParticipationQuery),
    responses(
        (status = 200, description = "Participation", body = Vec<ParticipationItem>),
        (status = 401, description = "No student identity (UNAUTHENTICATED)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, current, query), fields(student_id = current.student_id))]
pub async fn participation(
    current: CurrentStudent,
    State(state): State<AppState>,
    AppQuery(query): AppQuery<ParticipationQuery>,
) -> Result<Json<Vec<ParticipationItem>>, AppError> {
    Ok(Json(
        store::student::participation(&state.db, current.student_id, query.event_id).await?,
    ))
}

#[utoipa::path(
    get,
    path = "/student/feedback",
    tag = "Student",
    operation_id = "myFeedback",
    summary = "The current student's feedback",
    responses(
        (status = 200, description = "Feedback, newest first", body = Vec<StudentFeedbackItem>),
        (status = 401, description = "No student identity (UNAUTHENTICATED)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, current), fields(student_id = current.student_id))]
pub async fn feedback(
    current: CurrentStudent,
    State(state): State<AppState>,
) -> Result<Json<Vec<StudentFeedbackItem>>, AppError> {
    Ok(Json(
        store::feedback::student_feedback(&state.db, current.student_id).await?,
    ))
}

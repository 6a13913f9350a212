use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::models::registration::*;
use crate::models::shared::MessageResponse;
use crate::state::AppState;
use crate::store;

#[utoipa::path(
    post,
    path = "/register",
    tag = "Registrations",
    operation_id = "registerStudent",
    summary = "Register a student for an event",
    description = "A student can register for a given event at most once.",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Student registered", body = MessageResponse),
        (status = 400, description = "Validation error or already registered (VALIDATION_ERROR, CONFLICT)", body = ErrorBody),
        (status = 404, description = "Student or event not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(student_id = ?payload.student_id, event_id = ?payload.event_id))]
pub async fn register_student(
    State(state): State<AppState>,
    AppJson(payload): AppJson<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (student_id, event_id) = validate_register(&payload)?;
    store::registration::register_student(&state.db, student_id, event_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Student registered successfully")),
    ))
}

#[utoipa::path(
    get,
    path = "/registrations",
    tag = "Registrations",
    operation_id = "listRegistrations",
    summary = "List all registrations",
    description = "Every registration with its event and student details, newest first.",
    responses(
        (status = 200, description = "List of registrations", body = Vec<RegistrationListItem>),
    ),
)]
#[instrument(skip(state))]
pub async fn list_registrations(
    State(state): State<AppState>,
) -> Result<Json<Vec<RegistrationListItem>>, AppError> {
    Ok(Json(store::registration::list_registrations(&state.db).await?))
}

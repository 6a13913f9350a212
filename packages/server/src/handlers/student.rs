use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::models::student::*;
use crate::state::AppState;
use crate::store;

#[utoipa::path(
    post,
    path = "/students",
    tag = "Students",
    operation_id = "createStudent",
    summary = "Create a new student",
    description = "Creates a student. `college_id`, `name` and `email` are required; the email must not be taken.",
    request_body = CreateStudentRequest,
    responses(
        (status = 201, description = "Student created", body = CreateStudentResponse),
        (status = 400, description = "Validation error or email taken (VALIDATION_ERROR, CONFLICT)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload))]
pub async fn create_student(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateStudentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let new_student = validate_create_student(payload)?;
    let model = store::student::create_student(&state.db, new_student).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateStudentResponse {
            message: "Student created successfully".into(),
            student_id: model.id,
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/students/find-or-create",
    tag = "Students",
    operation_id = "findOrCreateStudent",
    summary = "Find a student by email, creating it if absent",
    description = "Looks the student up by email. An existing student is returned unchanged with `is_new = false` (200); otherwise a new one is created with `is_new = true` (201).",
    request_body = CreateStudentRequest,
    responses(
        (status = 200, description = "Existing student", body = FindOrCreateStudentResponse),
        (status = 201, description = "Student created", body = FindOrCreateStudentResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload))]
pub async fn find_or_create_student(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateStudentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let new_student = validate_create_student(payload)?;
    let (model, is_new) = store::student::find_or_create_student(&state.db, new_student).await?;

    let (status, message) = if is_new {
        (StatusCode::CREATED, "Student created successfully")
    } else {
        (StatusCode::OK, "Student found")
    };

    Ok((
        status,
        Json(FindOrCreateStudentResponse {
            message: message.into(),
            student_id: model.id,
            name: model.name,
            email: model.email,
            is_new,
        }),
    ))
}

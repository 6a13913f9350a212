use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::{info, instrument};

use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::extractors::params::AppPath;
use crate::models::event::*;
use crate::models::shared::MessageResponse;
use crate::state::AppState;
use crate::store;

#[utoipa::path(
    get,
    path = "/events",
    tag = "Events",
    operation_id = "listEvents",
    summary = "List all events",
    description = "Returns every event, ordered by date ascending.",
    responses(
        (status = 200, description = "List of events", body = Vec<EventResponse>),
        (status = 500, description = "Store error (STORE_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn list_events(
    State(state): State<AppState>,
) -> Result<Json<Vec<EventResponse>>, AppError> {
    let events = store::event::list_events(&state.db).await?;
    Ok(Json(events.into_iter().map(EventResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/events",
    tag = "Events",
    operation_id = "createEvent",
    summary = "Create a new event",
    description = "Creates an event. `college_id`, `name`, `type` and `date` are required.",
    request_body = CreateEventRequest,
    responses(
        (status = 201, description = "Event created", body = CreateEventResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload))]
pub async fn create_event(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateEventRequest>,
) -> Result<impl IntoResponse, AppError> {
    let new_event = validate_create_event(payload)?;
    let model = store::event::create_event(&state.db, new_event).await?;
    info!(event_id = model.id, "Event created");

    Ok((
        StatusCode::CREATED,
        Json(CreateEventResponse {
            message: "Event created successfully".into(),
            event_id: model.id,
        }),
    ))
}

#[utoipa::path(
    delete,
    path = "/events/{id}",
    tag = "Events",
    operation_id = "deleteEvent",
    summary = "Delete an event by ID",
    description = "Permanently deletes an event together with its registrations, attendance records and feedback.",
    params(("id" = i32, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Event deleted", body = MessageResponse),
        (status = 404, description = "Event not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id))]
pub async fn delete_event(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<MessageResponse>, AppError> {
    store::event::delete_event(&state.db, id).await?;
    info!(event_id = id, "Event deleted");
    Ok(Json(MessageResponse::new("Event deleted successfully")))
}

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};

use super::shared::{require, require_text};
use crate::entity::event;
use crate::error::AppError;

/// Every field is required; `Option` only lets a missing field surface as a
/// validation error naming it.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateEventRequest {
    #[schema(example = "C1")]
    pub college_id: Option<String>,
    #[schema(example = "Hack Day")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    #[schema(example = "workshop")]
    pub event_type: Option<String>,
    #[schema(example = "2024-05-01")]
    pub date: Option<NaiveDate>,
}

/// A validated event ready to insert.
#[derive(Debug)]
pub struct NewEvent {
    pub college_id: String,
    pub name: String,
    pub event_type: String,
    pub date: NaiveDate,
}

pub fn validate_create_event(req: CreateEventRequest) -> Result<NewEvent, AppError> {
    Ok(NewEvent {
        college_id: require_text(req.college_id, "college_id")?,
        name: require_text(req.name, "name")?,
        event_type: require_text(req.event_type, "type")?,
        date: require(req.date, "date")?,
    })
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct CreateEventResponse {
    #[schema(example = "Event created successfully")]
    pub message: String,
    #[schema(example = 1)]
    pub event_id: i32,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct EventResponse {
    pub event_id: i32,
    pub college_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl From<event::Model> for EventResponse {
    fn from(m: event::Model) -> Self {
        Self {
            event_id: m.id,
            college_id: m.college_id,
            name: m.name,
            event_type: m.event_type,
            date: m.date,
            created_at: m.created_at,
        }
    }
}

/// Event with its registration head-count, for the staff overview.
#[derive(Serialize, FromQueryResult, utoipa::ToSchema)]
pub struct StaffEventItem {
    pub event_id: i32,
    pub college_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub registration_count: i64,
}

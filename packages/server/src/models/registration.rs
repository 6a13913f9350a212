use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};

use super::shared::require_id;
use crate::error::AppError;

#[derive(Deserialize, utoipa::ToSchema)]
pub struct RegisterRequest {
    #[schema(example = 1)]
    pub student_id: Option<i32>,
    #[schema(example = 1)]
    pub event_id: Option<i32>,
}

/// Validated (student_id, event_id) pair.
pub fn validate_register(req: &RegisterRequest) -> Result<(i32, i32), AppError> {
    Ok((
        require_id(req.student_id, "student_id")?,
        require_id(req.event_id, "event_id")?,
    ))
}

/// Registration joined with its event and student.
#[derive(Serialize, FromQueryResult, utoipa::ToSchema)]
pub struct RegistrationListItem {
    pub registration_id: i32,
    pub student_id: i32,
    pub event_id: i32,
    pub registration_date: DateTime<Utc>,
    pub name: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub date: NaiveDate,
    pub college_id: String,
    pub student_name: String,
    pub email: String,
}

/// Staff roster row: one registered student.
#[derive(Serialize, utoipa::ToSchema)]
pub struct RosterRegistration {
    pub registration_id: i32,
    pub student_id: i32,
    pub name: String,
    pub email: String,
    pub college_id: String,
    pub registration_date: DateTime<Utc>,
}

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::shared::require_text;
use crate::error::AppError;

#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateStudentRequest {
    #[schema(example = "C1")]
    pub college_id: Option<String>,
    #[schema(example = "Ann")]
    pub name: Option<String>,
    #[schema(example = "ann@x.edu")]
    pub email: Option<String>,
}

/// A validated student ready to insert.
#[derive(Debug)]
pub struct NewStudent {
    pub college_id: String,
    pub name: String,
    pub email: String,
}

pub fn validate_create_student(req: CreateStudentRequest) -> Result<NewStudent, AppError> {
    Ok(NewStudent {
        college_id: require_text(req.college_id, "college_id")?,
        name: require_text(req.name, "name")?,
        email: require_text(req.email, "email")?,
    })
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct CreateStudentResponse {
    #[schema(example = "Student created successfully")]
    pub message: String,
    #[schema(example = 1)]
    pub student_id: i32,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct FindOrCreateStudentResponse {
    #[schema(example = "Student found")]
    pub message: String,
    pub student_id: i32,
    pub name: String,
    pub email: String,
    /// `true` when this call created the student.
    pub is_new: bool,
}

/// One row of the current student's participation listing.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ParticipationItem {
    pub event_id: i32,
    pub event_name: String,
    pub event_date: NaiveDate,
    pub registration_date: DateTime<Utc>,
    /// `present`, `absent`, or null when no attendance was recorded.
    pub attendance_status: Option<String>,
    pub feedback_given: bool,
}

#[derive(Deserialize, utoipa::IntoParams)]
pub struct ParticipationQuery {
    /// Restrict the listing to one event.
    pub event_id: Option<i32>,
}

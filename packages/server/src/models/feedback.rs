use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};

use super::shared::{require, require_id};
use crate::error::AppError;

pub const MIN_RATING: i64 = 1;
pub const MAX_RATING: i64 = 5;

#[derive(Deserialize, utoipa::ToSchema)]
pub struct SubmitFeedbackRequest {
    #[schema(example = 1)]
    pub student_id: Option<i32>,
    #[schema(example = 1)]
    pub event_id: Option<i32>,
    #[schema(example = 5, minimum = 1, maximum = 5)]
    pub rating: Option<i64>,
    pub feedback_text: Option<String>,
}

#[derive(Debug)]
pub struct NewFeedback {
    pub student_id: i32,
    pub event_id: i32,
    pub rating: i32,
    pub feedback_text: Option<String>,
}

pub fn validate_submit_feedback(req: SubmitFeedbackRequest) -> Result<NewFeedback, AppError> {
    let student_id = require_id(req.student_id, "student_id")?;
    let event_id = require_id(req.event_id, "event_id")?;
    let rating = require(req.rating, "rating")?;
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(AppError::Range(format!(
            "Rating must be between {MIN_RATING} and {MAX_RATING}"
        )));
    }
    Ok(NewFeedback {
        student_id,
        event_id,
        rating: rating as i32,
        feedback_text: req.feedback_text.filter(|t| !t.trim().is_empty()),
    })
}

/// Feedback joined with event and student, for the staff portal.
#[derive(Serialize, FromQueryResult, utoipa::ToSchema)]
pub struct StaffFeedbackItem {
    pub feedback_id: i32,
    pub student_id: i32,
    pub event_id: i32,
    pub rating: i32,
    pub feedback_text: Option<String>,
    pub feedback_date: DateTime<Utc>,
    pub event_name: String,
    pub event_type: String,
    pub event_date: NaiveDate,
    pub student_name: String,
    pub student_email: String,
}

/// One of the current student's own feedback entries.
#[derive(Serialize, FromQueryResult, utoipa::ToSchema)]
pub struct StudentFeedbackItem {
    pub feedback_id: i32,
    pub event_id: i32,
    pub rating: i32,
    pub feedback_text: Option<String>,
    pub feedback_date: DateTime<Utc>,
    pub event_name: String,
}

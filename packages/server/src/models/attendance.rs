use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};

use super::shared::{require, require_id};
use crate::error::AppError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl AttendanceStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Absent => "absent",
        }
    }
}

#[derive(Deserialize, utoipa::ToSchema)]
pub struct MarkAttendanceRequest {
    #[schema(example = 1)]
    pub student_id: Option<i32>,
    #[schema(example = 1)]
    pub event_id: Option<i32>,
    pub status: Option<AttendanceStatus>,
}

#[derive(Debug)]
pub struct NewAttendance {
    pub student_id: i32,
    pub event_id: i32,
    pub status: AttendanceStatus,
}

pub fn validate_mark_attendance(req: &MarkAttendanceRequest) -> Result<NewAttendance, AppError> {
    Ok(NewAttendance {
        student_id: require_id(req.student_id, "student_id")?,
        event_id: require_id(req.event_id, "event_id")?,
        status: require(req.status, "status")?,
    })
}

/// Attendance record joined with its event.
#[derive(Serialize, FromQueryResult, utoipa::ToSchema)]
pub struct AttendanceListItem {
    pub attendance_id: i32,
    pub student_id: i32,
    pub event_id: i32,
    pub status: String,
    pub attendance_date: DateTime<Utc>,
    pub event_name: String,
    pub event_type: String,
    pub event_date: NaiveDate,
}

/// Staff roster row: one attendance record with the student's details.
#[derive(Serialize, utoipa::ToSchema)]
pub struct RosterAttendance {
    pub attendance_id: i32,
    pub student_id: i32,
    pub event_id: i32,
    pub status: String,
    pub attendance_date: DateTime<Utc>,
    pub name: String,
    pub email: String,
    pub college_id: String,
}

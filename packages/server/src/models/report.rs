use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::FromQueryResult;
use serde::Serialize;

#[derive(Serialize, FromQueryResult, utoipa::ToSchema)]
pub struct RegistrationReportRow {
    pub event_id: i32,
    pub event_name: String,
    pub total_registrations: i64,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct AttendanceReportRow {
    pub event_id: i32,
    pub event_name: String,
    pub total_registered: i64,
    pub total_present: i64,
    /// 0 when nobody registered.
    pub attendance_percentage: f64,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct FeedbackReportRow {
    pub event_id: i32,
    pub event_name: String,
    /// Null when the event has no feedback.
    pub average_feedback_score: Option<f64>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct EventAnalysisRow {
    pub event_id: i32,
    pub event_name: String,
    pub event_type: String,
    pub event_date: NaiveDate,
    pub total_registered: i64,
    pub total_present: i64,
    pub total_absent: i64,
    pub attendance_percentage: f64,
    pub total_feedback_count: i64,
    pub average_rating: Option<f64>,
    pub min_rating: Option<i64>,
    pub max_rating: Option<i64>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct StudentInfo {
    pub student_id: i32,
    pub name: String,
    pub email: String,
    pub college_id: String,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct AttendanceSummary {
    pub total_events_registered: i64,
    pub events_attended: i64,
    pub events_absent: i64,
    pub attendance_percentage: f64,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct FeedbackSummary {
    pub total_feedback_given: i64,
    pub average_rating: Option<f64>,
    pub min_rating: Option<i64>,
    pub max_rating: Option<i64>,
}

/// One event the student registered for, with what happened at it.
#[derive(Serialize, FromQueryResult, utoipa::ToSchema)]
pub struct StudentEventDetail {
    pub event_id: i32,
    pub event_name: String,
    pub event_type: String,
    pub event_date: NaiveDate,
    pub registration_date: DateTime<Utc>,
    pub attendance_status: Option<String>,
    pub feedback_rating: Option<i32>,
    pub feedback_text: Option<String>,
    pub feedback_date: Option<DateTime<Utc>>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct StudentAnalysis {
    pub student_info: StudentInfo,
    pub attendance_summary: AttendanceSummary,
    pub feedback_summary: FeedbackSummary,
    pub event_details: Vec<StudentEventDetail>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct StudentParticipationReport {
    pub student_id: i32,
    pub student_name: String,
    pub email: String,
    /// Names of attended events, comma-separated, in date order.
    #[schema(example = "Hack Day,Career Fair")]
    pub events_attended: String,
}

#[derive(Serialize, FromQueryResult, utoipa::ToSchema)]
pub struct TopStudentRow {
    pub student_id: i32,
    pub student_name: String,
    pub email: String,
    pub events_attended_count: i64,
}

#[derive(Serialize, FromQueryResult, utoipa::ToSchema)]
pub struct EventsByTypeRow {
    pub event_id: i32,
    pub event_name: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub date: NaiveDate,
}

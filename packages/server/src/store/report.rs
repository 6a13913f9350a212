//! Read-only aggregations over events, registrations, attendance and feedback.
//!
//! Each per-table aggregate is computed in its own subquery and joined onto
//! `event`, so one table's fan-out never inflates another table's counts.
//! Ratios (percentages, averages) are derived here rather than in SQL so every
//! report applies the same zero-guard on every backend.

use std::cmp::Ordering;

use chrono::NaiveDate;
use sea_orm::*;

use super::dialect;
use super::student::find_student;
use crate::error::AppError;
use crate::models::report::*;

/// `100 * present / registered`, or 0 when nobody registered.
pub fn attendance_percentage(present: i64, registered: i64) -> f64 {
    if registered <= 0 {
        return 0.0;
    }
    present as f64 * 100.0 / registered as f64
}

/// Mean rating from a sum and a count; `None` when there is nothing to average.
pub fn average_rating(sum: Option<i64>, count: i64) -> Option<f64> {
    match sum {
        Some(sum) if count > 0 => Some(sum as f64 / count as f64),
        _ => None,
    }
}

/// Descending order for optional floats with nulls last.
fn desc_nulls_last(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

const REGISTRATIONS_PER_EVENT: &str = r#"
    SELECT e.id AS event_id, e.name AS event_name, COUNT(r.id) AS total_registrations
    FROM event e
    LEFT JOIN registration r ON r.event_id = e.id
    GROUP BY e.id, e.name
    ORDER BY total_registrations DESC, e.id ASC
"#;

/// Registration count per event, zero-registration events included.
pub async fn registrations_per_event<C: ConnectionTrait>(
    db: &C,
) -> Result<Vec<RegistrationReportRow>, AppError> {
    let stmt = dialect::unbound(db.get_database_backend(), REGISTRATIONS_PER_EVENT);
    Ok(RegistrationReportRow::find_by_statement(stmt).all(db).await?)
}

/// Per-event registration and attendance counts. Only attendance of
/// registered students counts towards `total_present`/`total_absent`.
#[derive(FromQueryResult)]
struct EventAttendanceCounts {
    event_id: i32,
    event_name: String,
    event_type: String,
    event_date: NaiveDate,
    total_registered: i64,
    total_present: i64,
    total_absent: i64,
    total_feedback_count: i64,
    rating_sum: Option<i64>,
    min_rating: Option<i64>,
    max_rating: Option<i64>,
}

const EVENT_COUNTS: &str = r#"
    SELECT e.id AS event_id, e.name AS event_name, e.type AS event_type, e.date AS event_date,
           COALESCE(ra.total_registered, 0) AS total_registered,
           COALESCE(ra.total_present, 0) AS total_present,
           COALESCE(ra.total_absent, 0) AS total_absent,
           COALESCE(fb.total_feedback_count, 0) AS total_feedback_count,
           fb.rating_sum, fb.min_rating, fb.max_rating
    FROM event e
    LEFT JOIN (
        SELECT r.event_id,
               COUNT(DISTINCT r.student_id) AS total_registered,
               COUNT(CASE WHEN a.status = 'present' THEN 1 END) AS total_present,
               COUNT(CASE WHEN a.status = 'absent' THEN 1 END) AS total_absent
        FROM registration r
        LEFT JOIN attendance a ON a.student_id = r.student_id AND a.event_id = r.event_id
        GROUP BY r.event_id
    ) ra ON ra.event_id = e.id
    LEFT JOIN (
        SELECT f.event_id,
               COUNT(f.id) AS total_feedback_count,
               CAST(SUM(f.rating) AS BIGINT) AS rating_sum,
               CAST(MIN(f.rating) AS BIGINT) AS min_rating,
               CAST(MAX(f.rating) AS BIGINT) AS max_rating
        FROM feedback f
        GROUP BY f.event_id
    ) fb ON fb.event_id = e.id
    ORDER BY e.date DESC, e.id ASC
"#;

async fn event_counts<C: ConnectionTrait>(db: &C) -> Result<Vec<EventAttendanceCounts>, AppError> {
    let stmt = dialect::unbound(db.get_database_backend(), EVENT_COUNTS);
    Ok(EventAttendanceCounts::find_by_statement(stmt).all(db).await?)
}

/// Attendance percentage per event, highest first.
pub async fn attendance_per_event<C: ConnectionTrait>(
    db: &C,
) -> Result<Vec<AttendanceReportRow>, AppError> {
    let mut rows: Vec<AttendanceReportRow> = event_counts(db)
        .await?
        .into_iter()
        .map(|c| AttendanceReportRow {
            event_id: c.event_id,
            event_name: c.event_name,
            total_registered: c.total_registered,
            total_present: c.total_present,
            attendance_percentage: attendance_percentage(c.total_present, c.total_registered),
        })
        .collect();
    rows.sort_by(|a, b| {
        b.attendance_percentage
            .total_cmp(&a.attendance_percentage)
            .then(a.event_id.cmp(&b.event_id))
    });
    Ok(rows)
}

/// Mean rating per event, highest first; events without feedback last.
pub async fn feedback_per_event<C: ConnectionTrait>(
    db: &C,
) -> Result<Vec<FeedbackReportRow>, AppError> {
    let mut rows: Vec<FeedbackReportRow> = event_counts(db)
        .await?
        .into_iter()
        .map(|c| FeedbackReportRow {
            event_id: c.event_id,
            event_name: c.event_name,
            average_feedback_score: average_rating(c.rating_sum, c.total_feedback_count),
        })
        .collect();
    rows.sort_by(|a, b| {
        desc_nulls_last(a.average_feedback_score, b.average_feedback_score)
            .then(a.event_id.cmp(&b.event_id))
    });
    Ok(rows)
}

/// Registration, attendance and feedback figures per event, latest date first.
pub async fn event_analysis<C: ConnectionTrait>(
    db: &C,
) -> Result<Vec<EventAnalysisRow>, AppError> {
    Ok(event_counts(db)
        .await?
        .into_iter()
        .map(|c| EventAnalysisRow {
            attendance_percentage: attendance_percentage(c.total_present, c.total_registered),
            average_rating: average_rating(c.rating_sum, c.total_feedback_count),
            event_id: c.event_id,
            event_name: c.event_name,
            event_type: c.event_type,
            event_date: c.event_date,
            total_registered: c.total_registered,
            total_present: c.total_present,
            total_absent: c.total_absent,
            total_feedback_count: c.total_feedback_count,
            min_rating: c.min_rating,
            max_rating: c.max_rating,
        })
        .collect())
}

#[derive(FromQueryResult)]
struct StudentAttendanceCounts {
    total_events_registered: i64,
    events_attended: i64,
    events_absent: i64,
}

const STUDENT_ATTENDANCE: &str = r#"
    SELECT COUNT(r.id) AS total_events_registered,
           COUNT(CASE WHEN a.status = 'present' THEN 1 END) AS events_attended,
           COUNT(CASE WHEN a.status = 'absent' THEN 1 END) AS events_absent
    FROM registration r
    LEFT JOIN attendance a ON a.student_id = r.student_id AND a.event_id = r.event_id
    WHERE r.student_id = ?
"#;

#[derive(FromQueryResult)]
struct StudentFeedbackCounts {
    total_feedback_given: i64,
    rating_sum: Option<i64>,
    min_rating: Option<i64>,
    max_rating: Option<i64>,
}

const STUDENT_FEEDBACK: &str = r#"
    SELECT COUNT(f.id) AS total_feedback_given,
           CAST(SUM(f.rating) AS BIGINT) AS rating_sum,
           CAST(MIN(f.rating) AS BIGINT) AS min_rating,
           CAST(MAX(f.rating) AS BIGINT) AS max_rating
    FROM feedback f
    WHERE f.student_id = ?
"#;

const STUDENT_EVENTS: &str = r#"
    SELECT e.id AS event_id, e.name AS event_name, e.type AS event_type, e.date AS event_date,
           r.registration_date, a.status AS attendance_status,
           f.rating AS feedback_rating, f.feedback_text, f.feedback_date
    FROM registration r
    JOIN event e ON e.id = r.event_id
    LEFT JOIN attendance a ON a.student_id = r.student_id AND a.event_id = r.event_id
    LEFT JOIN feedback f ON f.student_id = r.student_id AND f.event_id = r.event_id
    WHERE r.student_id = ?
    ORDER BY e.date DESC, e.id ASC
"#;

/// Profile, attendance and feedback summaries, and per-event history of one student.
pub async fn student_analysis<C: ConnectionTrait>(
    db: &C,
    student_id: i32,
) -> Result<StudentAnalysis, AppError> {
    let student = find_student(db, student_id).await?;
    let backend = db.get_database_backend();

    let attendance = StudentAttendanceCounts::find_by_statement(dialect::statement(
        backend,
        STUDENT_ATTENDANCE,
        [student_id.into()],
    ))
    .one(db)
    .await?
    .unwrap_or(StudentAttendanceCounts {
        total_events_registered: 0,
        events_attended: 0,
        events_absent: 0,
    });

    let feedback = StudentFeedbackCounts::find_by_statement(dialect::statement(
        backend,
        STUDENT_FEEDBACK,
        [student_id.into()],
    ))
    .one(db)
    .await?
    .unwrap_or(StudentFeedbackCounts {
        total_feedback_given: 0,
        rating_sum: None,
        min_rating: None,
        max_rating: None,
    });

    let event_details = StudentEventDetail::find_by_statement(dialect::statement(
        backend,
        STUDENT_EVENTS,
        [student_id.into()],
    ))
    .all(db)
    .await?;

    Ok(StudentAnalysis {
        student_info: StudentInfo {
            student_id: student.id,
            name: student.name,
            email: student.email,
            college_id: student.college_id,
        },
        attendance_summary: AttendanceSummary {
            attendance_percentage: attendance_percentage(
                attendance.events_attended,
                attendance.total_events_registered,
            ),
            total_events_registered: attendance.total_events_registered,
            events_attended: attendance.events_attended,
            events_absent: attendance.events_absent,
        },
        feedback_summary: FeedbackSummary {
            average_rating: average_rating(feedback.rating_sum, feedback.total_feedback_given),
            total_feedback_given: feedback.total_feedback_given,
            min_rating: feedback.min_rating,
            max_rating: feedback.max_rating,
        },
        event_details,
    })
}

#[derive(FromQueryResult)]
struct AttendedEvent {
    student_name: String,
    email: String,
    event_name: String,
}

const ATTENDED_EVENTS: &str = r#"
    SELECT s.name AS student_name, s.email, e.name AS event_name
    FROM attendance a
    JOIN student s ON s.id = a.student_id
    JOIN event e ON e.id = a.event_id
    WHERE a.status = 'present' AND a.student_id = ?
    ORDER BY e.date ASC, e.id ASC
"#;

/// Names of the events a student was present at, as one comma-separated row.
pub async fn student_participation<C: ConnectionTrait>(
    db: &C,
    student_id: i32,
) -> Result<StudentParticipationReport, AppError> {
    let rows = AttendedEvent::find_by_statement(dialect::statement(
        db.get_database_backend(),
        ATTENDED_EVENTS,
        [student_id.into()],
    ))
    .all(db)
    .await?;

    let Some(first) = rows.first() else {
        return Err(AppError::NotFound(
            "No participation found for this student".into(),
        ));
    };
    let student_name = first.student_name.clone();
    let email = first.email.clone();
    let events_attended = rows
        .into_iter()
        .map(|r| r.event_name)
        .collect::<Vec<_>>()
        .join(",");

    Ok(StudentParticipationReport {
        student_id,
        student_name,
        email,
        events_attended,
    })
}

const TOP_STUDENTS: &str = r#"
    SELECT s.id AS student_id, s.name AS student_name, s.email,
           COUNT(a.id) AS events_attended_count
    FROM student s
    JOIN attendance a ON a.student_id = s.id
    WHERE a.status = 'present'
    GROUP BY s.id, s.name, s.email
    ORDER BY events_attended_count DESC, s.id ASC
    LIMIT 3
"#;

/// The three students with the most "present" records; ties go to the lower id.
pub async fn top_students<C: ConnectionTrait>(db: &C) -> Result<Vec<TopStudentRow>, AppError> {
    let stmt = dialect::unbound(db.get_database_backend(), TOP_STUDENTS);
    Ok(TopStudentRow::find_by_statement(stmt).all(db).await?)
}

const EVENTS_BY_TYPE: &str = r#"
    SELECT e.id AS event_id, e.name AS event_name, e.type AS event_type, e.date
    FROM event e
    WHERE e.type = ?
    ORDER BY e.date ASC, e.id ASC
"#;

/// Events whose type matches exactly, soonest first.
pub async fn events_by_type<C: ConnectionTrait>(
    db: &C,
    event_type: &str,
) -> Result<Vec<EventsByTypeRow>, AppError> {
    let stmt = dialect::statement(
        db.get_database_backend(),
        EVENTS_BY_TYPE,
        [event_type.into()],
    );
    Ok(EventsByTypeRow::find_by_statement(stmt).all(db).await?)
}

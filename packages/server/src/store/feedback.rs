use sea_orm::*;

use super::dialect;
use super::event::find_event;
use super::student::find_student;
use crate::entity::feedback;
use crate::error::AppError;
use crate::models::feedback::{NewFeedback, StaffFeedbackItem, StudentFeedbackItem};

pub async fn submit_feedback<C: ConnectionTrait>(
    db: &C,
    new_feedback: NewFeedback,
) -> Result<feedback::Model, AppError> {
    find_student(db, new_feedback.student_id).await?;
    find_event(db, new_feedback.event_id).await?;

    let model = feedback::ActiveModel {
        student_id: Set(new_feedback.student_id),
        event_id: Set(new_feedback.event_id),
        rating: Set(new_feedback.rating),
        feedback_text: Set(new_feedback.feedback_text),
        feedback_date: Set(chrono::Utc::now()),
        ..Default::default()
    };

    match model.insert(db).await {
        Ok(model) => Ok(model),
        Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => Err(
            AppError::Conflict("Feedback already submitted for this student and event".into()),
        ),
        Err(e) => Err(e.into()),
    }
}

const ALL_FEEDBACK: &str = r#"
    SELECT f.id AS feedback_id, f.student_id, f.event_id, f.rating, f.feedback_text,
           f.feedback_date, e.name AS event_name, e.type AS event_type, e.date AS event_date,
           s.name AS student_name, s.email AS student_email
    FROM feedback f
    JOIN event e ON e.id = f.event_id
    JOIN student s ON s.id = f.student_id
    ORDER BY f.feedback_date DESC, f.id DESC
"#;

/// All feedback with event and student details, newest first.
pub async fn list_feedback<C: ConnectionTrait>(
    db: &C,
) -> Result<Vec<StaffFeedbackItem>, AppError> {
    let stmt = dialect::unbound(db.get_database_backend(), ALL_FEEDBACK);
    Ok(StaffFeedbackItem::find_by_statement(stmt).all(db).await?)
}

const STUDENT_FEEDBACK: &str = r#"
    SELECT f.id AS feedback_id, f.event_id, f.rating, f.feedback_text, f.feedback_date,
           e.name AS event_name
    FROM feedback f
    JOIN event e ON e.id = f.event_id
    WHERE f.student_id = ?
    ORDER BY f.feedback_date DESC, f.id DESC
"#;

pub async fn student_feedback<C: ConnectionTrait>(
    db: &C,
    student_id: i32,
) -> Result<Vec<StudentFeedbackItem>, AppError> {
    let stmt = dialect::statement(
        db.get_database_backend(),
        STUDENT_FEEDBACK,
        [student_id.into()],
    );
    Ok(StudentFeedbackItem::find_by_statement(stmt).all(db).await?)
}

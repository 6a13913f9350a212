use sea_orm::*;
use tracing::debug;

use super::dialect;
use crate::entity::student;
use crate::error::AppError;
use crate::models::student::{NewStudent, ParticipationItem};

/// Look up a student by ID, returning 404 if not found.
pub async fn find_student<C: ConnectionTrait>(
    db: &C,
    id: i32,
) -> Result<student::Model, AppError> {
    student::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound("Student not found".into()))
}

pub async fn find_student_by_email<C: ConnectionTrait>(
    db: &C,
    email: &str,
) -> Result<Option<student::Model>, AppError> {
    Ok(student::Entity::find()
        .filter(student::Column::Email.eq(email))
        .one(db)
        .await?)
}

fn new_student_model(new_student: NewStudent) -> student::ActiveModel {
    student::ActiveModel {
        college_id: Set(new_student.college_id),
        name: Set(new_student.name),
        email: Set(new_student.email),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    }
}

/// Insert a student; a taken email is a conflict.
pub async fn create_student<C: ConnectionTrait>(
    db: &C,
    new_student: NewStudent,
) -> Result<student::Model, AppError> {
    match new_student_model(new_student).insert(db).await {
        Ok(model) => Ok(model),
        Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => Err(
            AppError::Conflict("A student with this email already exists".into()),
        ),
        Err(e) => Err(e.into()),
    }
}

/// Return the student with this email, creating it if absent.
///
/// The flag is `true` only when this call inserted the row. An existing
/// student is returned untouched even if name or college differ.
pub async fn find_or_create_student<C: ConnectionTrait>(
    db: &C,
    new_student: NewStudent,
) -> Result<(student::Model, bool), AppError> {
    if let Some(existing) = find_student_by_email(db, &new_student.email).await? {
        return Ok((existing, false));
    }
    insert_or_find_student(db, new_student).await
}

/// Insert step of find-or-create. A concurrent caller may have inserted the
/// same email after our lookup; the unique violation then resolves to that row.
pub async fn insert_or_find_student<C: ConnectionTrait>(
    db: &C,
    new_student: NewStudent,
) -> Result<(student::Model, bool), AppError> {
    let email = new_student.email.clone();
    match new_student_model(new_student).insert(db).await {
        Ok(model) => Ok((model, true)),
        Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
            debug!(%email, "Lost find-or-create race, re-reading existing student");
            let existing = find_student_by_email(db, &email).await?.ok_or_else(|| {
                AppError::Store(format!("Student {email} vanished after unique violation"))
            })?;
            Ok((existing, false))
        }
        Err(e) => Err(e.into()),
    }
}

#[derive(FromQueryResult)]
struct ParticipationRow {
    event_id: i32,
    event_name: String,
    event_date: chrono::NaiveDate,
    registration_date: chrono::DateTime<chrono::Utc>,
    attendance_status: Option<String>,
    feedback_id: Option<i32>,
}

const PARTICIPATION: &str = r#"
    SELECT r.event_id, e.name AS event_name, e.date AS event_date, r.registration_date,
           a.status AS attendance_status, f.id AS feedback_id
    FROM registration r
    JOIN event e ON e.id = r.event_id
    LEFT JOIN attendance a ON a.student_id = r.student_id AND a.event_id = r.event_id
    LEFT JOIN feedback f ON f.student_id = r.student_id AND f.event_id = r.event_id
    WHERE r.student_id = ?
"#;

/// A student's registrations with attendance and whether feedback was left,
/// newest registration first. `event_id` narrows it to one event.
pub async fn participation<C: ConnectionTrait>(
    db: &C,
    student_id: i32,
    event_id: Option<i32>,
) -> Result<Vec<ParticipationItem>, AppError> {
    let backend = db.get_database_backend();
    let stmt = match event_id {
        Some(event_id) => dialect::statement(
            backend,
            &format!("{PARTICIPATION} AND r.event_id = ? ORDER BY r.registration_date DESC, r.id DESC"),
            [student_id.into(), event_id.into()],
        ),
        None => dialect::statement(
            backend,
            &format!("{PARTICIPATION} ORDER BY r.registration_date DESC, r.id DESC"),
            [student_id.into()],
        ),
    };

    let rows = ParticipationRow::find_by_statement(stmt).all(db).await?;
    Ok(rows
        .into_iter()
        .map(|row| ParticipationItem {
            event_id: row.event_id,
            event_name: row.event_name,
            event_date: row.event_date,
            registration_date: row.registration_date,
            attendance_status: row.attendance_status,
            feedback_given: row.feedback_id.is_some(),
        })
        .collect())
}

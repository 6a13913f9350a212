use sea_orm::*;

use super::dialect;
use super::event::find_event;
use super::student::find_student;
use crate::entity::{attendance, student};
use crate::error::AppError;
use crate::models::attendance::{AttendanceListItem, NewAttendance, RosterAttendance};

fn new_attendance_model(record: &NewAttendance) -> attendance::ActiveModel {
    attendance::ActiveModel {
        student_id: Set(record.student_id),
        event_id: Set(record.event_id),
        status: Set(record.status.as_str().to_string()),
        attendance_date: Set(chrono::Utc::now()),
        ..Default::default()
    }
}

async fn find_attendance<C: ConnectionTrait>(
    db: &C,
    student_id: i32,
    event_id: i32,
) -> Result<Option<attendance::Model>, AppError> {
    Ok(attendance::Entity::find()
        .filter(attendance::Column::StudentId.eq(student_id))
        .filter(attendance::Column::EventId.eq(event_id))
        .one(db)
        .await?)
}

/// Self-service marking: a second record for the same pair is rejected.
pub async fn mark_attendance<C: ConnectionTrait>(
    db: &C,
    record: NewAttendance,
) -> Result<attendance::Model, AppError> {
    find_student(db, record.student_id).await?;
    find_event(db, record.event_id).await?;

    match new_attendance_model(&record).insert(db).await {
        Ok(model) => Ok(model),
        Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => Err(
            AppError::Conflict("Attendance already marked for this student and event".into()),
        ),
        Err(e) => Err(e.into()),
    }
}

/// Staff marking: overwrites the status of an existing record, inserts
/// otherwise. Losing an insert race falls back to the update.
pub async fn upsert_attendance<C: ConnectionTrait>(
    db: &C,
    record: NewAttendance,
) -> Result<attendance::Model, AppError> {
    find_student(db, record.student_id).await?;
    find_event(db, record.event_id).await?;

    if let Some(existing) = find_attendance(db, record.student_id, record.event_id).await? {
        return update_status(db, existing, &record).await;
    }

    match new_attendance_model(&record).insert(db).await {
        Ok(model) => Ok(model),
        Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
            let existing = find_attendance(db, record.student_id, record.event_id)
                .await?
                .ok_or_else(|| AppError::Store(e.to_string()))?;
            update_status(db, existing, &record).await
        }
        Err(e) => Err(e.into()),
    }
}

async fn update_status<C: ConnectionTrait>(
    db: &C,
    existing: attendance::Model,
    record: &NewAttendance,
) -> Result<attendance::Model, AppError> {
    let mut active: attendance::ActiveModel = existing.into();
    active.status = Set(record.status.as_str().to_string());
    Ok(active.update(db).await?)
}

const ALL_ATTENDANCE: &str = r#"
    SELECT a.id AS attendance_id, a.student_id, a.event_id, a.status, a.attendance_date,
           e.name AS event_name, e.type AS event_type, e.date AS event_date
    FROM attendance a
    JOIN event e ON e.id = a.event_id
    ORDER BY a.attendance_date DESC, a.id DESC
"#;

/// Every attendance record with its event, newest first.
pub async fn list_attendance<C: ConnectionTrait>(
    db: &C,
) -> Result<Vec<AttendanceListItem>, AppError> {
    let stmt = dialect::unbound(db.get_database_backend(), ALL_ATTENDANCE);
    Ok(AttendanceListItem::find_by_statement(stmt).all(db).await?)
}

/// Attendance records for one event with student details, oldest first.
pub async fn event_attendance<C: ConnectionTrait>(
    db: &C,
    event_id: i32,
) -> Result<Vec<RosterAttendance>, AppError> {
    let rows = attendance::Entity::find()
        .filter(attendance::Column::EventId.eq(event_id))
        .find_also_related(student::Entity)
        .order_by_asc(attendance::Column::AttendanceDate)
        .order_by_asc(attendance::Column::Id)
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .filter_map(|(att, stu)| {
            stu.map(|s| RosterAttendance {
                attendance_id: att.id,
                student_id: att.student_id,
                event_id: att.event_id,
                status: att.status,
                attendance_date: att.attendance_date,
                name: s.name,
                email: s.email,
                college_id: s.college_id,
            })
        })
        .collect())
}

use sea_orm::*;

use super::dialect;
use super::event::find_event;
use super::student::find_student;
use crate::entity::{registration, student};
use crate::error::AppError;
use crate::models::registration::{RegistrationListItem, RosterRegistration};

const ALREADY_REGISTERED: &str = "Student is already registered for this event";

/// Register a student for an event.
///
/// The existence check gives the common duplicate a clear message without
/// touching the constraint; the insert still translates a unique violation
/// into the same conflict for callers that race past the check.
pub async fn register_student<C: ConnectionTrait>(
    db: &C,
    student_id: i32,
    event_id: i32,
) -> Result<registration::Model, AppError> {
    find_student(db, student_id).await?;
    find_event(db, event_id).await?;

    let existing = registration::Entity::find()
        .filter(registration::Column::StudentId.eq(student_id))
        .filter(registration::Column::EventId.eq(event_id))
        .one(db)
        .await?;
    if existing.is_some() {
        return Err(AppError::Conflict(ALREADY_REGISTERED.into()));
    }

    insert_registration(db, student_id, event_id).await
}

/// Insert step of [`register_student`].
pub async fn insert_registration<C: ConnectionTrait>(
    db: &C,
    student_id: i32,
    event_id: i32,
) -> Result<registration::Model, AppError> {
    let model = registration::ActiveModel {
        student_id: Set(student_id),
        event_id: Set(event_id),
        registration_date: Set(chrono::Utc::now()),
        ..Default::default()
    };

    match model.insert(db).await {
        Ok(model) => Ok(model),
        Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
            Err(AppError::Conflict(ALREADY_REGISTERED.into()))
        }
        Err(e) => Err(e.into()),
    }
}

const ALL_REGISTRATIONS: &str = r#"
    SELECT r.id AS registration_id, r.student_id, r.event_id, r.registration_date,
           e.name, e.type AS event_type, e.date, e.college_id,
           s.name AS student_name, s.email
    FROM registration r
    JOIN event e ON e.id = r.event_id
    JOIN student s ON s.id = r.student_id
    ORDER BY r.registration_date DESC, r.id DESC
"#;

/// Every registration with event and student details, newest first.
pub async fn list_registrations<C: ConnectionTrait>(
    db: &C,
) -> Result<Vec<RegistrationListItem>, AppError> {
    let stmt = dialect::unbound(db.get_database_backend(), ALL_REGISTRATIONS);
    Ok(RegistrationListItem::find_by_statement(stmt).all(db).await?)
}

/// Students registered for one event, in registration order.
pub async fn event_roster<C: ConnectionTrait>(
    db: &C,
    event_id: i32,
) -> Result<Vec<RosterRegistration>, AppError> {
    let rows = registration::Entity::find()
        .filter(registration::Column::EventId.eq(event_id))
        .find_also_related(student::Entity)
        .order_by_asc(registration::Column::RegistrationDate)
        .order_by_asc(registration::Column::Id)
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .filter_map(|(reg, stu)| {
            stu.map(|s| RosterRegistration {
                registration_id: reg.id,
                student_id: s.id,
                name: s.name,
                email: s.email,
                college_id: s.college_id,
                registration_date: reg.registration_date,
            })
        })
        .collect())
}

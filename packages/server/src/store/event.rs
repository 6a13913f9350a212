use sea_orm::*;

use super::dialect;
use crate::entity::{attendance, event, feedback, registration};
use crate::error::AppError;
use crate::models::event::{NewEvent, StaffEventItem};

/// All events, soonest first.
pub async fn list_events<C: ConnectionTrait>(db: &C) -> Result<Vec<event::Model>, AppError> {
    Ok(event::Entity::find()
        .order_by_asc(event::Column::Date)
        .order_by_asc(event::Column::Id)
        .all(db)
        .await?)
}

pub async fn create_event<C: ConnectionTrait>(
    db: &C,
    new_event: NewEvent,
) -> Result<event::Model, AppError> {
    let model = event::ActiveModel {
        college_id: Set(new_event.college_id),
        name: Set(new_event.name),
        event_type: Set(new_event.event_type),
        date: Set(new_event.date),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };
    Ok(model.insert(db).await?)
}

/// Look up an event by ID, returning 404 if not found.
pub async fn find_event<C: ConnectionTrait>(db: &C, id: i32) -> Result<event::Model, AppError> {
    event::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound("Event not found".into()))
}

/// Delete an event together with its registrations, attendance and feedback.
pub async fn delete_event(db: &DatabaseConnection, id: i32) -> Result<(), AppError> {
    let txn = db.begin().await?;
    find_event(&txn, id).await?;

    registration::Entity::delete_many()
        .filter(registration::Column::EventId.eq(id))
        .exec(&txn)
        .await?;
    attendance::Entity::delete_many()
        .filter(attendance::Column::EventId.eq(id))
        .exec(&txn)
        .await?;
    feedback::Entity::delete_many()
        .filter(feedback::Column::EventId.eq(id))
        .exec(&txn)
        .await?;
    event::Entity::delete_by_id(id).exec(&txn).await?;

    txn.commit().await?;
    Ok(())
}

const EVENTS_WITH_COUNTS: &str = r#"
    SELECT e.id AS event_id, e.college_id, e.name, e.type AS event_type, e.date, e.created_at,
           COUNT(r.id) AS registration_count
    FROM event e
    LEFT JOIN registration r ON r.event_id = e.id
    GROUP BY e.id, e.college_id, e.name, e.type, e.date, e.created_at
    ORDER BY e.date ASC, e.id ASC
"#;

/// Every event with its registration count, soonest first.
pub async fn list_events_with_counts<C: ConnectionTrait>(
    db: &C,
) -> Result<Vec<StaffEventItem>, AppError> {
    let stmt = dialect::unbound(db.get_database_backend(), EVENTS_WITH_COUNTS);
    Ok(StaffEventItem::find_by_statement(stmt).all(db).await?)
}

use sea_orm::entity::prelude::*;

/// Unique per (student_id, event_id); see `database::ensure_indexes`.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "feedback")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub student_id: i32,
    #[sea_orm(belongs_to, from = "student_id", to = "id")]
    pub student: HasOne<super::student::Entity>,

    pub event_id: i32,
    #[sea_orm(belongs_to, from = "event_id", to = "id")]
    pub event: HasOne<super::event::Entity>,

    /// 1 to 5 inclusive.
    pub rating: i32,
    pub feedback_text: Option<String>,
    pub feedback_date: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}

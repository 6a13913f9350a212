use sea_orm::entity::prelude::*;

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "event")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub college_id: String,
    pub name: String,
    #[sea_orm(column_name = "type")]
    pub event_type: String,
    pub date: Date,

    #[sea_orm(has_many)]
    pub registrations: HasMany<super::registration::Entity>,

    #[sea_orm(has_many)]
    pub attendance: HasMany<super::attendance::Entity>,

    #[sea_orm(has_many)]
    pub feedback: HasMany<super::feedback::Entity>,

    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}

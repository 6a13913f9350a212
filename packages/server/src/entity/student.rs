use sea_orm::entity::prelude::*;

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "student")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub college_id: String,
    pub name: String,
    /// Natural key; find-or-create looks students up by it.
    #[sea_orm(unique)]
    pub email: String,

    #[sea_orm(has_many)]
    pub registrations: HasMany<super::registration::Entity>,

    #[sea_orm(has_many)]
    pub attendance: HasMany<super::attendance::Entity>,

    #[sea_orm(has_many)]
    pub feedback: HasMany<super::feedback::Entity>,

    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}

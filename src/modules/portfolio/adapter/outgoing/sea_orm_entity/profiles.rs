use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "profiles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub name: String,

    #[sea_orm(column_type = "String(StringLen::N(200))")]
    pub title: String,

    #[sea_orm(column_type = "String(StringLen::N(254))")]
    pub email: String,

    #[sea_orm(column_type = "String(StringLen::N(20))")]
    pub phone: String,

    #[sea_orm(column_type = "Text")]
    pub bio: String,

    #[sea_orm(column_type = "Text")]
    pub long_description: String,

    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub city: String,

    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub country: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub photo: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub cv: Option<String>,

    #[sea_orm(column_type = "Text")]
    pub linkedin: String,

    #[sea_orm(column_type = "Text")]
    pub github: String,

    #[sea_orm(column_type = "Text")]
    pub twitter: String,

    #[sea_orm(column_type = "Text")]
    pub website: String,

    pub active: bool,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

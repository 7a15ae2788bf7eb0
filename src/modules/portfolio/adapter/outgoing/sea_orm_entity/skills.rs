use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "skills")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub name: String,

    /// Lowercase code, see `SkillCategory`.
    #[sea_orm(column_type = "String(StringLen::N(20))")]
    pub category: String,

    pub level: i32,

    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub icon: String,

    #[sea_orm(column_type = "String(StringLen::N(7))")]
    pub color: String,

    pub display_order: i32,

    pub active: bool,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::project_skills::Entity")]
    ProjectSkills,

    #[sea_orm(has_many = "super::experience_skills::Entity")]
    ExperienceSkills,
}

impl Related<super::project_skills::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectSkills.def()
    }
}

impl Related<super::experience_skills::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExperienceSkills.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

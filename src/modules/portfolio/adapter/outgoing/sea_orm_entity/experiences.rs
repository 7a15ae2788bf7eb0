use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "experiences")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Lowercase code, see `ExperienceKind`.
    #[sea_orm(column_type = "String(StringLen::N(20))")]
    pub kind: String,

    #[sea_orm(column_type = "String(StringLen::N(200))")]
    pub title: String,

    #[sea_orm(column_type = "String(StringLen::N(200))")]
    pub organization: String,

    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub location: String,

    pub start_date: Date,

    #[sea_orm(nullable)]
    pub end_date: Option<Date>,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    pub display_order: i32,

    pub active: bool,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::experience_skills::Entity")]
    ExperienceSkills,
}

impl Related<super::experience_skills::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExperienceSkills.def()
    }
}

// Many-to-many: experiences <-> skills via experience_skills
impl Related<super::skills::Entity> for Entity {
    fn to() -> RelationDef {
        super::experience_skills::Relation::Skills.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::experience_skills::Relation::Experiences.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

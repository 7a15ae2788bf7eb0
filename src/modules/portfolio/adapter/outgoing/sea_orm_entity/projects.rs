use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    #[sea_orm(column_type = "String(StringLen::N(200))")]
    pub title: String,

    #[sea_orm(column_type = "String(StringLen::N(300))")]
    pub short_description: String,

    #[sea_orm(column_type = "Text")]
    pub long_description: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub main_image: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub second_image: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub third_image: Option<String>,

    #[sea_orm(column_type = "Text")]
    pub demo_url: String,

    #[sea_orm(column_type = "Text")]
    pub code_url: String,

    #[sea_orm(column_type = "Text")]
    pub case_study_url: String,

    /// Lowercase code, see `ProjectStatus`.
    #[sea_orm(column_type = "String(StringLen::N(20))")]
    pub status: String,

    pub start_date: Date,

    #[sea_orm(nullable)]
    pub end_date: Option<Date>,

    pub featured: bool,

    pub display_order: i32,

    pub views: i64,

    pub active: bool,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::project_skills::Entity")]
    ProjectSkills,
}

impl Related<super::project_skills::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectSkills.def()
    }
}

// Many-to-many: projects <-> skills via project_skills
impl Related<super::skills::Entity> for Entity {
    fn to() -> RelationDef {
        super::project_skills::Relation::Skills.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::project_skills::Relation::Projects.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

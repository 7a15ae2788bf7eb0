pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_updated_at_function;
mod m20250601_000010_create_table_profiles;
mod m20250601_000020_create_table_skills;
mod m20250601_000030_create_table_projects;
mod m20250601_000040_create_table_project_skills;
mod m20250601_000050_create_table_experiences;
mod m20250601_000060_create_table_experience_skills;
mod m20250601_000070_create_table_contact_messages;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_updated_at_function::Migration),
            Box::new(m20250601_000010_create_table_profiles::Migration),
            Box::new(m20250601_000020_create_table_skills::Migration),
            Box::new(m20250601_000030_create_table_projects::Migration),
            Box::new(m20250601_000040_create_table_project_skills::Migration),
            Box::new(m20250601_000050_create_table_experiences::Migration),
            Box::new(m20250601_000060_create_table_experience_skills::Migration),
            Box::new(m20250601_000070_create_table_contact_messages::Migration),
        ]
    }
}

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ExperienceSkills::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ExperienceSkills::ExperienceId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ExperienceSkills::SkillId).big_integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(ExperienceSkills::ExperienceId)
                            .col(ExperienceSkills::SkillId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_experience_skills_experience_id")
                            .from(ExperienceSkills::Table, ExperienceSkills::ExperienceId)
                            .to(Experiences::Table, Experiences::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_experience_skills_skill_id")
                            .from(ExperienceSkills::Table, ExperienceSkills::SkillId)
                            .to(Skills::Table, Skills::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ExperienceSkills::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ExperienceSkills {
    Table,
    ExperienceId,
    SkillId,
}

#[derive(DeriveIden)]
enum Experiences {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Skills {
    Table,
    Id,
}

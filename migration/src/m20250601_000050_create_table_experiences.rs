use sea_orm_migration::prelude::*;

const EXPERIENCE_KINDS: [&str; 4] = ["work", "education", "personal_project", "volunteer"];

fn experiences_table() -> TableCreateStatement {
    Table::create()
        .table(Experiences::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(Experiences::Id)
                .big_integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(Experiences::Kind)
                .string_len(20)
                .not_null()
                .check(Expr::col(Experiences::Kind).is_in(EXPERIENCE_KINDS)),
        )
        .col(ColumnDef::new(Experiences::Title).string_len(200).not_null())
        .col(
            ColumnDef::new(Experiences::Organization)
                .string_len(200)
                .not_null(),
        )
        .col(
            ColumnDef::new(Experiences::Location)
                .string_len(100)
                .not_null()
                .default(""),
        )
        .col(ColumnDef::new(Experiences::StartDate).date().not_null())
        .col(ColumnDef::new(Experiences::EndDate).date())
        .col(ColumnDef::new(Experiences::Description).text().not_null())
        .col(
            ColumnDef::new(Experiences::DisplayOrder)
                .integer()
                .not_null()
                .default(0),
        )
        .col(
            ColumnDef::new(Experiences::Active)
                .boolean()
                .not_null()
                .default(true),
        )
        .col(
            ColumnDef::new(Experiences::CreatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .to_owned()
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(experiences_table()).await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE experiences
                ADD CONSTRAINT chk_experiences_date_range
                CHECK (end_date IS NULL OR end_date >= start_date);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_experiences_active_start
                ON experiences (start_date DESC)
                WHERE active = true;
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_experiences_active_start;")
            .await?;

        manager
            .drop_table(Table::drop().table(Experiences::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Experiences {
    Table,
    Id,
    Kind,
    Title,
    Organization,
    Location,
    StartDate,
    EndDate,
    Description,
    DisplayOrder,
    Active,
    CreatedAt,
}

use sea_orm_migration::prelude::*;

const PROJECT_STATUSES: [&str; 4] = ["in_progress", "finished", "paused", "archived"];

fn projects_table() -> TableCreateStatement {
    Table::create()
        .table(Projects::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(Projects::Id)
                .big_integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(Projects::Title).string_len(200).not_null())
        .col(
            ColumnDef::new(Projects::ShortDescription)
                .string_len(300)
                .not_null(),
        )
        .col(ColumnDef::new(Projects::LongDescription).text().not_null())
        .col(ColumnDef::new(Projects::MainImage).text())
        .col(ColumnDef::new(Projects::SecondImage).text())
        .col(ColumnDef::new(Projects::ThirdImage).text())
        .col(ColumnDef::new(Projects::DemoUrl).text().not_null().default(""))
        .col(ColumnDef::new(Projects::CodeUrl).text().not_null().default(""))
        .col(
            ColumnDef::new(Projects::CaseStudyUrl)
                .text()
                .not_null()
                .default(""),
        )
        .col(
            ColumnDef::new(Projects::Status)
                .string_len(20)
                .not_null()
                .default("finished")
                .check(Expr::col(Projects::Status).is_in(PROJECT_STATUSES)),
        )
        .col(ColumnDef::new(Projects::StartDate).date().not_null())
        .col(ColumnDef::new(Projects::EndDate).date())
        .col(
            ColumnDef::new(Projects::Featured)
                .boolean()
                .not_null()
                .default(false),
        )
        .col(
            ColumnDef::new(Projects::DisplayOrder)
                .integer()
                .not_null()
                .default(0),
        )
        .col(
            ColumnDef::new(Projects::Views)
                .big_integer()
                .not_null()
                .default(0)
                .check(Expr::col(Projects::Views).gte(0)),
        )
        .col(
            ColumnDef::new(Projects::Active)
                .boolean()
                .not_null()
                .default(true),
        )
        .col(
            ColumnDef::new(Projects::CreatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .col(
            ColumnDef::new(Projects::UpdatedAt)
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
        // =====================================================
        // Create projects table
        // =====================================================
        manager.create_table(projects_table()).await?;

        // Reject inverted date ranges at write time
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE projects
                ADD CONSTRAINT chk_projects_date_range
                CHECK (end_date IS NULL OR end_date >= start_date);
                "#,
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_projects_active_order
                ON projects (featured DESC, display_order, start_date DESC)
                WHERE active = true;
                "#,
            )
            .await?;

        // =====================================================
        // updated_at trigger
        // =====================================================
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_projects_updated_at
                BEFORE UPDATE ON projects
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP TRIGGER IF EXISTS update_projects_updated_at ON projects;
                DROP INDEX IF EXISTS idx_projects_active_order;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
    Title,
    ShortDescription,
    LongDescription,
    MainImage,
    SecondImage,
    ThirdImage,
    DemoUrl,
    CodeUrl,
    CaseStudyUrl,
    Status,
    StartDate,
    EndDate,
    Featured,
    DisplayOrder,
    Views,
    Active,
    CreatedAt,
    UpdatedAt,
}

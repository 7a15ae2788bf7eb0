use sea_orm_migration::prelude::*;

const SKILL_CATEGORIES: [&str; 7] = [
    "frontend", "backend", "database", "devops", "design", "ai", "other",
];

fn skills_table() -> TableCreateStatement {
    Table::create()
        .table(Skills::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(Skills::Id)
                .big_integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(Skills::Name).string_len(100).not_null())
        .col(
            ColumnDef::new(Skills::Category)
                .string_len(20)
                .not_null()
                .check(Expr::col(Skills::Category).is_in(SKILL_CATEGORIES)),
        )
        .col(
            ColumnDef::new(Skills::Level)
                .integer()
                .not_null()
                .default(50)
                .check(Expr::col(Skills::Level).between(0, 100)),
        )
        .col(
            ColumnDef::new(Skills::Icon)
                .string_len(100)
                .not_null()
                .default(""),
        )
        .col(
            ColumnDef::new(Skills::Color)
                .string_len(7)
                .not_null()
                .default("#007bff"),
        )
        .col(
            ColumnDef::new(Skills::DisplayOrder)
                .integer()
                .not_null()
                .default(0),
        )
        .col(
            ColumnDef::new(Skills::Active)
                .boolean()
                .not_null()
                .default(true),
        )
        .col(
            ColumnDef::new(Skills::CreatedAt)
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
        manager.create_table(skills_table()).await?;

        // Snapshot ordering: display_order, name
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_skills_active_order
                ON skills (display_order, name)
                WHERE active = true;
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_skills_active_order;")
            .await?;

        manager
            .drop_table(Table::drop().table(Skills::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Skills {
    Table,
    Id,
    Name,
    Category,
    Level,
    Icon,
    Color,
    DisplayOrder,
    Active,
    CreatedAt,
}

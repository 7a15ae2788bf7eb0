use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Profiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Profiles::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Profiles::Name).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Profiles::Title)
                            .string_len(200)
                            .not_null()
                            .default("Full Stack Developer"),
                    )
                    .col(ColumnDef::new(Profiles::Email).string_len(254).not_null())
                    .col(
                        ColumnDef::new(Profiles::Phone)
                            .string_len(20)
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Profiles::Bio).text().not_null())
                    .col(ColumnDef::new(Profiles::LongDescription).text().not_null())
                    .col(
                        ColumnDef::new(Profiles::City)
                            .string_len(100)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Profiles::Country)
                            .string_len(100)
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Profiles::Photo).text())
                    .col(ColumnDef::new(Profiles::Cv).text())
                    .col(ColumnDef::new(Profiles::Linkedin).text().not_null().default(""))
                    .col(ColumnDef::new(Profiles::Github).text().not_null().default(""))
                    .col(ColumnDef::new(Profiles::Twitter).text().not_null().default(""))
                    .col(ColumnDef::new(Profiles::Website).text().not_null().default(""))
                    .col(
                        ColumnDef::new(Profiles::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Profiles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Profiles::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_profiles_updated_at
                BEFORE UPDATE ON profiles
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
            .execute_unprepared("DROP TRIGGER IF EXISTS update_profiles_updated_at ON profiles;")
            .await?;

        manager
            .drop_table(Table::drop().table(Profiles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Profiles {
    Table,
    Id,
    Name,
    Title,
    Email,
    Phone,
    Bio,
    LongDescription,
    City,
    Country,
    Photo,
    Cv,
    Linkedin,
    Github,
    Twitter,
    Website,
    Active,
    CreatedAt,
    UpdatedAt,
}

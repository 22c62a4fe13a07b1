use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Project::Table)
                    .col(
                        ColumnDef::new(Project::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Project::Name)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Project::Description).string_len(1000))
                    .col(
                        ColumnDef::new(Project::Status)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Project::StartDate).timestamp_with_time_zone())
                    .col(ColumnDef::new(Project::EndDate).timestamp_with_time_zone())
                    .col(ColumnDef::new(Project::TeamId).uuid().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-project-team")
                            .from(Project::Table, Project::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(Project::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Project {
    Table,
    Id,
    Name,
    Description,
    Status,
    StartDate,
    EndDate,
    TeamId,
}

#[derive(DeriveIden)]
enum Team {
    Table,
    Id,
}

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserTeam::Table)
                    .col(ColumnDef::new(UserTeam::UserId).uuid().not_null())
                    .col(ColumnDef::new(UserTeam::TeamId).uuid().not_null())
                    .primary_key(
                        Index::create()
                            .col(UserTeam::UserId)
                            .col(UserTeam::TeamId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-user_team-user")
                            .from(UserTeam::Table, UserTeam::UserId)
                            .to(User::Table, User::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-user_team-team")
                            .from(UserTeam::Table, UserTeam::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
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
                    .table(UserTeam::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum UserTeam {
    Table,
    UserId,
    TeamId,
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Team {
    Table,
    Id,
}

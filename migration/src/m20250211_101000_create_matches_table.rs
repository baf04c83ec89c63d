use crate::utils::timestamp_columns;
use entity::{
    matches::{self, constraints::*},
    teams,
};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut table = Table::create();

        table
            .table(matches::Entity)
            .if_not_exists()
            .col(
                ColumnDef::new(matches::Column::Id)
                    .integer()
                    .not_null()
                    .auto_increment(),
            )
            .col(
                ColumnDef::new(matches::Column::HomeTeamId)
                    .integer()
                    .not_null(),
            )
            .col(
                ColumnDef::new(matches::Column::AwayTeamId)
                    .integer()
                    .not_null(),
            )
            .col(ColumnDef::new(matches::Column::MatchDate).date().not_null())
            .col(ColumnDef::new(matches::Column::MatchTime).time().not_null())
            .col(
                ColumnDef::new(matches::Column::Status)
                    .string_len(16)
                    .not_null()
                    .default("scheduled"),
            )
            .primary_key(Index::create().name(PK_MATCHES).col(matches::Column::Id))
            .foreign_key(
                ForeignKey::create()
                    .name(FK_MATCHES_HOME_TEAM_ID)
                    .from(matches::Entity, matches::Column::HomeTeamId)
                    .to(teams::Entity, teams::Column::Id)
                    .on_delete(ForeignKeyAction::Restrict),
            )
            .foreign_key(
                ForeignKey::create()
                    .name(FK_MATCHES_AWAY_TEAM_ID)
                    .from(matches::Entity, matches::Column::AwayTeamId)
                    .to(teams::Entity, teams::Column::Id)
                    .on_delete(ForeignKeyAction::Restrict),
            )
            .check(
                Expr::col(matches::Column::HomeTeamId)
                    .ne(Expr::col(matches::Column::AwayTeamId)),
            );

        timestamp_columns(
            &mut table,
            matches::Column::CreatedAt,
            matches::Column::UpdatedAt,
            matches::Column::DeletedAt,
        );

        manager.create_table(table.to_owned()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(matches::Entity).to_owned())
            .await
    }
}

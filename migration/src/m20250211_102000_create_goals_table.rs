use crate::utils::timestamp_columns;
use entity::{
    goals::{self, constraints::*},
    match_results, players,
};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut table = Table::create();

        table
            .table(goals::Entity)
            .if_not_exists()
            .col(
                ColumnDef::new(goals::Column::Id)
                    .integer()
                    .not_null()
                    .auto_increment(),
            )
            .col(
                ColumnDef::new(goals::Column::MatchResultId)
                    .integer()
                    .not_null(),
            )
            .col(ColumnDef::new(goals::Column::PlayerId).integer().not_null())
            .col(ColumnDef::new(goals::Column::Minute).integer().not_null())
            .primary_key(Index::create().name(PK_GOALS).col(goals::Column::Id))
            .foreign_key(
                ForeignKey::create()
                    .name(FK_GOALS_MATCH_RESULT_ID)
                    .from(goals::Entity, goals::Column::MatchResultId)
                    .to(match_results::Entity, match_results::Column::Id)
                    .on_delete(ForeignKeyAction::Cascade),
            )
            .foreign_key(
                ForeignKey::create()
                    .name(FK_GOALS_PLAYER_ID)
                    .from(goals::Entity, goals::Column::PlayerId)
                    .to(players::Entity, players::Column::Id)
                    .on_delete(ForeignKeyAction::Restrict),
            )
            .check(Expr::col(goals::Column::Minute).between(1, 120));

        timestamp_columns(
            &mut table,
            goals::Column::CreatedAt,
            goals::Column::UpdatedAt,
            goals::Column::DeletedAt,
        );

        manager.create_table(table.to_owned()).await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_GOALS_MATCH_RESULT_ID)
                    .table(goals::Entity)
                    .col(goals::Column::MatchResultId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(goals::Entity).to_owned())
            .await
    }
}

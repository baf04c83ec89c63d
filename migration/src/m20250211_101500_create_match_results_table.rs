use crate::utils::timestamp_columns;
use entity::{
    match_results::{self, constraints::*},
    matches,
};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut table = Table::create();

        table
            .table(match_results::Entity)
            .if_not_exists()
            .col(
                ColumnDef::new(match_results::Column::Id)
                    .integer()
                    .not_null()
                    .auto_increment(),
            )
            .col(
                ColumnDef::new(match_results::Column::MatchId)
                    .integer()
                    .not_null(),
            )
            .col(
                ColumnDef::new(match_results::Column::HomeScore)
                    .integer()
                    .not_null(),
            )
            .col(
                ColumnDef::new(match_results::Column::AwayScore)
                    .integer()
                    .not_null(),
            )
            .primary_key(
                Index::create()
                    .name(PK_MATCH_RESULTS)
                    .col(match_results::Column::Id),
            )
            .index(
                Index::create()
                    .name(UC_MATCH_RESULTS_MATCH_ID)
                    .col(match_results::Column::MatchId)
                    .unique(),
            )
            .foreign_key(
                ForeignKey::create()
                    .name(FK_MATCH_RESULTS_MATCH_ID)
                    .from(match_results::Entity, match_results::Column::MatchId)
                    .to(matches::Entity, matches::Column::Id)
                    .on_delete(ForeignKeyAction::Cascade),
            )
            .check(Expr::col(match_results::Column::HomeScore).gte(0))
            .check(Expr::col(match_results::Column::AwayScore).gte(0));

        timestamp_columns(
            &mut table,
            match_results::Column::CreatedAt,
            match_results::Column::UpdatedAt,
            match_results::Column::DeletedAt,
        );

        manager.create_table(table.to_owned()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(match_results::Entity).to_owned())
            .await
    }
}

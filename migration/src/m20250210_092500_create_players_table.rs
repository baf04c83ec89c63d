use crate::utils::timestamp_columns;
use const_format::formatcp;
use entity::{
    players::{self, constraints::*},
    teams,
};
use sea_orm_migration::prelude::*;

// sea-query has no partial indexes, and jersey numbers only have to be unique
// among players that are not tombstoned.
const CREATE_JERSEY_INDEX: &str = formatcp!(
    r#"CREATE UNIQUE INDEX IF NOT EXISTS "{}" ON "players" ("team_id", "jersey_number") WHERE "deleted_at" IS NULL"#,
    UC_PLAYERS_TEAM_ID_JERSEY_NUMBER
);

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut table = Table::create();

        table
            .table(players::Entity)
            .if_not_exists()
            .col(
                ColumnDef::new(players::Column::Id)
                    .integer()
                    .not_null()
                    .auto_increment(),
            )
            .col(ColumnDef::new(players::Column::TeamId).integer().not_null())
            .col(
                ColumnDef::new(players::Column::Name)
                    .string_len(100)
                    .not_null(),
            )
            .col(ColumnDef::new(players::Column::Height).double().not_null())
            .col(ColumnDef::new(players::Column::Weight).double().not_null())
            .col(
                ColumnDef::new(players::Column::Position)
                    .string_len(16)
                    .not_null(),
            )
            .col(
                ColumnDef::new(players::Column::JerseyNumber)
                    .integer()
                    .not_null(),
            )
            .primary_key(Index::create().name(PK_PLAYERS).col(players::Column::Id))
            .foreign_key(
                ForeignKey::create()
                    .name(FK_PLAYERS_TEAM_ID)
                    .from(players::Entity, players::Column::TeamId)
                    .to(teams::Entity, teams::Column::Id)
                    .on_delete(ForeignKeyAction::Restrict),
            );

        timestamp_columns(
            &mut table,
            players::Column::CreatedAt,
            players::Column::UpdatedAt,
            players::Column::DeletedAt,
        );

        manager.create_table(table.to_owned()).await?;

        manager
            .get_connection()
            .execute_unprepared(CREATE_JERSEY_INDEX)
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(players::Entity).to_owned())
            .await
    }
}

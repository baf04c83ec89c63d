use crate::utils::timestamp_columns;
use entity::teams::{self, constraints::*};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut table = Table::create();

        table
            .table(teams::Entity)
            .if_not_exists()
            .col(
                ColumnDef::new(teams::Column::Id)
                    .integer()
                    .not_null()
                    .auto_increment(),
            )
            .col(
                ColumnDef::new(teams::Column::Name)
                    .string_len(100)
                    .not_null(),
            )
            .col(ColumnDef::new(teams::Column::Logo).string().null())
            .col(
                ColumnDef::new(teams::Column::FoundedYear)
                    .integer()
                    .not_null(),
            )
            .col(ColumnDef::new(teams::Column::Address).string().not_null())
            .col(ColumnDef::new(teams::Column::City).string().not_null())
            .primary_key(Index::create().name(PK_TEAMS).col(teams::Column::Id));

        timestamp_columns(
            &mut table,
            teams::Column::CreatedAt,
            teams::Column::UpdatedAt,
            teams::Column::DeletedAt,
        );

        manager.create_table(table.to_owned()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(teams::Entity).to_owned())
            .await
    }
}

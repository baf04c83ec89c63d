use crate::utils::timestamp_columns;
use entity::users::{self, constraints::*};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut table = Table::create();

        table
            .table(users::Entity)
            .if_not_exists()
            .col(
                ColumnDef::new(users::Column::Id)
                    .integer()
                    .not_null()
                    .auto_increment(),
            )
            .col(
                ColumnDef::new(users::Column::Username)
                    .string_len(50)
                    .not_null(),
            )
            .col(
                ColumnDef::new(users::Column::Email)
                    .string_len(255)
                    .not_null(),
            )
            .col(ColumnDef::new(users::Column::Password).string().not_null())
            .col(
                ColumnDef::new(users::Column::Role)
                    .string_len(32)
                    .not_null(),
            )
            .primary_key(Index::create().name(PK_USERS).col(users::Column::Id))
            .index(
                Index::create()
                    .name(UC_USERS_EMAIL)
                    .col(users::Column::Email)
                    .unique(),
            )
            .index(
                Index::create()
                    .name(UC_USERS_USERNAME)
                    .col(users::Column::Username)
                    .unique(),
            );

        timestamp_columns(
            &mut table,
            users::Column::CreatedAt,
            users::Column::UpdatedAt,
            users::Column::DeletedAt,
        );

        manager.create_table(table.to_owned()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(users::Entity).to_owned())
            .await
    }
}

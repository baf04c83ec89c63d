use sea_orm_migration::prelude::*;

/// `created_at`, `updated_at` and `deleted_at` columns shared by every table.
pub(crate) fn timestamp_columns<C>(
    table: &mut TableCreateStatement,
    created_at: C,
    updated_at: C,
    deleted_at: C,
) -> &mut TableCreateStatement
where
    C: IntoIden,
{
    table
        .col(
            ColumnDef::new(created_at)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .col(
            ColumnDef::new(updated_at)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .col(ColumnDef::new(deleted_at).timestamp_with_time_zone().null())
}

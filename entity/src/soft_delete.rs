use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ColumnTrait, EntityTrait, PrimaryKeyTrait, QueryFilter, Select, UpdateMany,
};

/// Tombstone handling for tables carrying a nullable `deleted_at` column.
///
/// Rows with a `deleted_at` value are invisible to every `find_active*` query,
/// but stay in the table so historical references (goals of a removed player,
/// matches of a removed team) keep resolving.
pub trait SoftDelete: EntityTrait {
    fn deleted_at_column() -> Self::Column;

    fn updated_at_column() -> Self::Column;

    #[inline]
    fn find_active() -> Select<Self> {
        Self::find().filter(Self::deleted_at_column().is_null())
    }

    #[inline]
    fn find_active_by_id<T>(id: T) -> Select<Self>
    where
        T: Into<<Self::PrimaryKey as PrimaryKeyTrait>::ValueType>,
    {
        Self::find_by_id(id).filter(Self::deleted_at_column().is_null())
    }

    /// `UPDATE .. SET deleted_at = now()` restricted to rows that are still live.
    ///
    /// Callers narrow it further with `filter` and inspect `rows_affected`.
    fn soft_delete() -> UpdateMany<Self> {
        let now = Utc::now();

        Self::update_many()
            .col_expr(Self::deleted_at_column(), Expr::value(now))
            .col_expr(Self::updated_at_column(), Expr::value(now))
            .filter(Self::deleted_at_column().is_null())
    }
}

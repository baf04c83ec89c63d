pub mod goals;
pub mod match_results;
pub mod matches;
pub mod players;
mod soft_delete;
pub mod teams;
pub mod users;

pub use soft_delete::SoftDelete;

/// Implements `ActiveModelBehavior` so that `created_at` is stamped on insert
/// and `updated_at` on every save.
macro_rules! timestamped_behavior {
    () => {
        #[::async_trait::async_trait]
        impl ActiveModelBehavior for ActiveModel {
            async fn before_save<C>(
                mut self,
                _db: &C,
                insert: bool,
            ) -> ::std::result::Result<Self, ::sea_orm::DbErr>
            where
                C: ::sea_orm::ConnectionTrait,
            {
                let now = ::chrono::Utc::now();

                if insert {
                    self.created_at = ::sea_orm::ActiveValue::Set(now);
                }
                self.updated_at = ::sea_orm::ActiveValue::Set(now);

                Ok(self)
            }
        }
    };
}

pub(crate) use timestamped_behavior;

/// Implements [`SoftDelete`] for the `Entity` of the current module.
macro_rules! soft_deletable {
    () => {
        impl $crate::SoftDelete for Entity {
            #[inline]
            fn deleted_at_column() -> Column {
                Column::DeletedAt
            }

            #[inline]
            fn updated_at_column() -> Column {
                Column::UpdatedAt
            }
        }
    };
}

pub(crate) use soft_deletable;

use sea_orm::entity::prelude::*;
use serde::Serialize;

pub mod constraints {
    pub const PK_USERS: &str = "PK_users";
    pub const UC_USERS_EMAIL: &str = "UC_users_email";
    pub const UC_USERS_USERNAME: &str = "UC_users_username";
}

pub const DEFAULT_ROLE: &str = "admin";

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub role: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    #[serde(skip_serializing)]
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

crate::timestamped_behavior!();
crate::soft_deletable!();

impl Entity {
    #[inline]
    pub fn find_by_email(email: &str) -> Select<Entity> {
        use crate::SoftDelete;

        Self::find_active().filter(Column::Email.eq(email))
    }
}

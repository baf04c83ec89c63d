use super::players;
use sea_orm::entity::prelude::*;
use serde::Serialize;

pub mod constraints {
    pub const PK_TEAMS: &str = "PK_teams";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "teams")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub logo: Option<String>,
    pub founded_year: i32,
    pub address: String,
    pub city: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    #[serde(skip_serializing)]
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Players,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Players => Entity::has_many(players::Entity).into(),
        }
    }
}

impl Related<players::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Players.def()
    }
}

crate::timestamped_behavior!();
crate::soft_deletable!();

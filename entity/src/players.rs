use super::{goals, teams};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

pub mod constraints {
    pub const PK_PLAYERS: &str = "PK_players";
    pub const FK_PLAYERS_TEAM_ID: &str = "FK_players_team_id";
    pub const UC_PLAYERS_TEAM_ID_JERSEY_NUMBER: &str = "UC_players_team_id_jersey_number";
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "players")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub team_id: i32,
    pub name: String,
    /// centimeters
    pub height: f64,
    /// kilograms
    pub weight: f64,
    pub position: Position,
    pub jersey_number: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    #[serde(skip_serializing)]
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(
    EnumIter, DeriveActiveEnum, PartialEq, Eq, Clone, Copy, Debug, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[sea_orm(rs_type = "String", db_type = "String(Some(16))")]
pub enum Position {
    #[sea_orm(string_value = "forward")]
    Forward,
    #[sea_orm(string_value = "midfielder")]
    Midfielder,
    #[sea_orm(string_value = "defender")]
    Defender,
    #[sea_orm(string_value = "goalkeeper")]
    Goalkeeper,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Team,
    Goals,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Team => Entity::belongs_to(teams::Entity)
                .from(Column::TeamId)
                .to(teams::Column::Id)
                .into(),
            Self::Goals => Entity::has_many(goals::Entity).into(),
        }
    }
}

impl Related<teams::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl Related<goals::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Goals.def()
    }
}

crate::timestamped_behavior!();
crate::soft_deletable!();

impl Entity {
    /// Live player of `team_id` wearing `jersey_number`.
    #[inline]
    pub fn find_by_jersey(team_id: i32, jersey_number: i32) -> Select<Entity> {
        use crate::SoftDelete;

        Self::find_active()
            .filter(Column::TeamId.eq(team_id))
            .filter(Column::JerseyNumber.eq(jersey_number))
    }
}

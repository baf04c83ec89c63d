use super::{match_results, players};
use sea_orm::entity::prelude::*;
use serde::Serialize;

pub mod constraints {
    pub const PK_GOALS: &str = "PK_goals";
    pub const FK_GOALS_MATCH_RESULT_ID: &str = "FK_goals_match_result_id";
    pub const FK_GOALS_PLAYER_ID: &str = "FK_goals_player_id";
    pub const IDX_GOALS_MATCH_RESULT_ID: &str = "IDX_goals_match_result_id";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "goals")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub match_result_id: i32,
    pub player_id: i32,
    pub minute: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    #[serde(skip_serializing)]
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    MatchResult,
    Player,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::MatchResult => Entity::belongs_to(match_results::Entity)
                .from(Column::MatchResultId)
                .to(match_results::Column::Id)
                .into(),
            Self::Player => Entity::belongs_to(players::Entity)
                .from(Column::PlayerId)
                .to(players::Column::Id)
                .into(),
        }
    }
}

impl Related<match_results::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MatchResult.def()
    }
}

impl Related<players::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Player.def()
    }
}

crate::timestamped_behavior!();
crate::soft_deletable!();

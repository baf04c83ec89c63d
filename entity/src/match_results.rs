use super::{goals, matches};
use sea_orm::entity::prelude::*;
use serde::Serialize;

pub mod constraints {
    pub const PK_MATCH_RESULTS: &str = "PK_match_results";
    pub const UC_MATCH_RESULTS_MATCH_ID: &str = "UC_match_results_match_id";
    pub const FK_MATCH_RESULTS_MATCH_ID: &str = "FK_match_results_match_id";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "match_results")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub match_id: i32,
    pub home_score: i32,
    pub away_score: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    #[serde(skip_serializing)]
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Match,
    Goals,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Match => Entity::belongs_to(matches::Entity)
                .from(Column::MatchId)
                .to(matches::Column::Id)
                .into(),
            Self::Goals => Entity::has_many(goals::Entity).into(),
        }
    }
}

impl Related<matches::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Match.def()
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
    /// The result row of a match, tombstoned or not.
    #[inline]
    pub fn find_by_match(match_id: i32) -> Select<Entity> {
        Self::find().filter(Column::MatchId.eq(match_id))
    }
}

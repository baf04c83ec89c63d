use super::{match_results, teams};
use crate::SoftDelete;
use sea_orm::{entity::prelude::*, sea_query::Expr, Condition, JoinType, QuerySelect};
use serde::{Deserialize, Serialize};

pub mod constraints {
    pub const PK_MATCHES: &str = "PK_matches";
    pub const FK_MATCHES_HOME_TEAM_ID: &str = "FK_matches_home_team_id";
    pub const FK_MATCHES_AWAY_TEAM_ID: &str = "FK_matches_away_team_id";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "matches")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub home_team_id: i32,
    pub away_team_id: i32,
    pub match_date: Date,
    pub match_time: Time,
    pub status: MatchStatus,
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
pub enum MatchStatus {
    #[sea_orm(string_value = "scheduled")]
    Scheduled,
    #[sea_orm(string_value = "completed")]
    Completed,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    HomeTeam,
    AwayTeam,
    Result,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::HomeTeam => Entity::belongs_to(teams::Entity)
                .from(Column::HomeTeamId)
                .to(teams::Column::Id)
                .into(),
            Self::AwayTeam => Entity::belongs_to(teams::Entity)
                .from(Column::AwayTeamId)
                .to(teams::Column::Id)
                .into(),
            Self::Result => Entity::has_one(match_results::Entity).into(),
        }
    }
}

impl Related<match_results::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Result.def()
    }
}

crate::timestamped_behavior!();
crate::soft_deletable!();

impl Model {
    #[inline]
    pub fn is_completed(&self) -> bool {
        self.status == MatchStatus::Completed
    }
}

impl Entity {
    /// Live, completed matches with `id <= until` that `team_id` won, either
    /// at home or away.
    pub fn find_wins_until(team_id: i32, until: i32) -> Select<Entity> {
        let home_score = || Expr::col((match_results::Entity, match_results::Column::HomeScore));
        let away_score = || Expr::col((match_results::Entity, match_results::Column::AwayScore));

        Self::find_active()
            .join(JoinType::InnerJoin, Relation::Result.def())
            .filter(match_results::Column::DeletedAt.is_null())
            .filter(Column::Id.lte(until))
            .filter(Column::Status.eq(MatchStatus::Completed))
            .filter(
                Condition::any()
                    .add(
                        Condition::all()
                            .add(Column::HomeTeamId.eq(team_id))
                            .add(home_score().gt(away_score())),
                    )
                    .add(
                        Condition::all()
                            .add(Column::AwayTeamId.eq(team_id))
                            .add(away_score().gt(home_score())),
                    ),
            )
    }
}

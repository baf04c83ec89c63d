use crate::error::{self, Result};
use entity::{goals, match_results, matches, players, teams, SoftDelete};
use sea_orm::{ColumnTrait, ConnectionTrait, QueryFilter, QueryOrder};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Serialize)]
pub struct GoalDetails {
    #[serde(flatten)]
    pub goal: goals::Model,
    pub player: Option<players::Model>,
}

#[derive(Debug, Serialize)]
pub struct ResultDetails {
    #[serde(flatten)]
    pub result: match_results::Model,
    pub goals: Vec<GoalDetails>,
}

#[derive(Debug, Serialize)]
pub struct MatchDetails {
    #[serde(flatten)]
    pub game: matches::Model,
    pub home_team: Option<teams::Model>,
    pub away_team: Option<teams::Model>,
    pub match_result: Option<ResultDetails>,
}

/// Live goals of the given results keyed by result id, in minute order.
///
/// Scorers are attached even when they have been soft deleted since.
pub async fn load_goals<C>(db: &C, result_ids: &[i32]) -> Result<HashMap<i32, Vec<GoalDetails>>>
where
    C: ConnectionTrait,
{
    let mut grouped: HashMap<i32, Vec<GoalDetails>> = HashMap::new();

    if result_ids.is_empty() {
        return Ok(grouped);
    }

    let rows = goals::Entity::find_active()
        .filter(goals::Column::MatchResultId.is_in(result_ids.iter().copied()))
        .order_by_asc(goals::Column::Minute)
        .order_by_asc(goals::Column::Id)
        .find_also_related(players::Entity)
        .all(db)
        .await?;

    for (goal, player) in rows {
        grouped
            .entry(goal.match_result_id)
            .or_default()
            .push(GoalDetails { goal, player });
    }

    Ok(grouped)
}

pub async fn load_result<C>(db: &C, result: match_results::Model) -> Result<ResultDetails>
where
    C: ConnectionTrait,
{
    let goals = load_goals(db, &[result.id])
        .await?
        .remove(&result.id)
        .unwrap_or_default();

    Ok(ResultDetails { result, goals })
}

/// Live results of the given matches keyed by match id.
pub async fn load_results<C>(db: &C, match_ids: &[i32]) -> Result<HashMap<i32, ResultDetails>>
where
    C: ConnectionTrait,
{
    if match_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let results = match_results::Entity::find_active()
        .filter(match_results::Column::MatchId.is_in(match_ids.iter().copied()))
        .all(db)
        .await?;

    let ids: Vec<i32> = results.iter().map(|result| result.id).collect();
    let mut goals = load_goals(db, &ids).await?;

    Ok(results
        .into_iter()
        .map(|result| {
            let goals = goals.remove(&result.id).unwrap_or_default();
            (result.match_id, ResultDetails { result, goals })
        })
        .collect())
}

/// Live teams keyed by id. Missing ids are soft deleted teams.
pub async fn load_teams<C>(db: &C, team_ids: &[i32]) -> Result<HashMap<i32, teams::Model>>
where
    C: ConnectionTrait,
{
    if team_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let teams = teams::Entity::find_active()
        .filter(teams::Column::Id.is_in(team_ids.iter().copied()))
        .all(db)
        .await?;

    Ok(teams.into_iter().map(|team| (team.id, team)).collect())
}

/// Attaches teams and results to `games`, keeping their order.
pub async fn load_matches<C>(db: &C, games: Vec<matches::Model>) -> Result<Vec<MatchDetails>>
where
    C: ConnectionTrait,
{
    let match_ids: Vec<i32> = games.iter().map(|game| game.id).collect();
    let team_ids: Vec<i32> = games
        .iter()
        .flat_map(|game| [game.home_team_id, game.away_team_id])
        .collect();

    let teams = load_teams(db, &team_ids).await?;
    let mut results = load_results(db, &match_ids).await?;

    Ok(games
        .into_iter()
        .map(|game| MatchDetails {
            home_team: teams.get(&game.home_team_id).cloned(),
            away_team: teams.get(&game.away_team_id).cloned(),
            match_result: results.remove(&game.id),
            game,
        })
        .collect())
}

pub async fn load_match<C>(db: &C, game: matches::Model) -> Result<MatchDetails>
where
    C: ConnectionTrait,
{
    load_matches(db, vec![game])
        .await?
        .pop()
        .ok_or(error::INTERNAL)
}

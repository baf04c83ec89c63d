use super::Summary;
use crate::{
    error,
    extractors::Path,
    response::Envelope,
    utils::{
        loaders::{load_result, load_teams, GoalDetails},
        scoring::{top_scorers, TopScorer},
    },
    Result, StateTrait,
};
use axum::extract::State;
use entity::{match_results, matches, SoftDelete};
use sea_orm::{ColumnTrait, ConnectionTrait, PaginatorTrait, QueryFilter};
use serde::Serialize;

#[derive(Serialize)]
pub struct Report {
    #[serde(flatten)]
    summary: Summary,
    goals: Vec<GoalDetails>,
    top_scorers: Vec<TopScorer>,
    home_team_total_wins: u64,
    away_team_total_wins: u64,
}

/// Wins of `team_id` in live completed matches up to and including `until`.
async fn total_wins<C: ConnectionTrait>(db: &C, team_id: i32, until: i32) -> Result<u64> {
    Ok(matches::Entity::find_wins_until(team_id, until)
        .count(db)
        .await?)
}

pub async fn get_report<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
) -> Result<Envelope<Report>> {
    let game = matches::Entity::find_active_by_id(id)
        .one(state.db())
        .await?
        .ok_or(error::MATCH_NOT_FOUND)?;

    if !game.is_completed() {
        return Err(error::MATCH_NOT_COMPLETED);
    }

    let result = match_results::Entity::find_by_match(game.id)
        .filter(match_results::Column::DeletedAt.is_null())
        .one(state.db())
        .await?
        .ok_or(error::RESULT_NOT_FOUND)?;

    let teams = load_teams(state.db(), &[game.home_team_id, game.away_team_id]).await?;
    let summary = Summary::new(&game, &result, &teams);

    let details = load_result(state.db(), result).await?;

    let top_scorers = top_scorers(details.goals.iter().map(|goal| {
        let name = goal.player.as_ref().map_or("", |player| player.name.as_str());
        (goal.goal.player_id, name)
    }));

    let home_team_total_wins = total_wins(state.db(), game.home_team_id, game.id).await?;
    let away_team_total_wins = total_wins(state.db(), game.away_team_id, game.id).await?;

    Ok(Envelope::ok(
        "match report retrieved successfully",
        Report {
            summary,
            goals: details.goals,
            top_scorers,
            home_team_total_wins,
            away_team_total_wins,
        },
    ))
}

mod get;
mod list;

use crate::{utils::scoring::FinalStatus, StateTrait};
use axum::{routing::get, Router};
use chrono::{NaiveDate, NaiveTime};
use entity::{match_results, matches, teams};
use serde::Serialize;
use std::collections::HashMap;

/// Read-only match reports
///
/// GET /reports/matches
/// GET /reports/matches/:id
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route("/matches", get(list::list_reports::<S>))
        .route("/matches/:id", get(get::get_report::<S>))
}

#[derive(Debug, Serialize)]
pub struct Summary {
    match_id: i32,
    match_date: NaiveDate,
    match_time: NaiveTime,
    home_team: Option<teams::Model>,
    away_team: Option<teams::Model>,
    home_score: i32,
    away_score: i32,
    final_status: FinalStatus,
}

impl Summary {
    fn new(
        game: &matches::Model,
        result: &match_results::Model,
        teams: &HashMap<i32, teams::Model>,
    ) -> Self {
        Self {
            match_id: game.id,
            match_date: game.match_date,
            match_time: game.match_time,
            home_team: teams.get(&game.home_team_id).cloned(),
            away_team: teams.get(&game.away_team_id).cloned(),
            home_score: result.home_score,
            away_score: result.away_score,
            final_status: FinalStatus::from_scores(result.home_score, result.away_score),
        }
    }
}

use super::Schedule;
use crate::{
    extractors::Json,
    response::Envelope,
    utils::loaders::{load_match, MatchDetails},
    Result, StateTrait,
};
use axum::extract::State;
use entity::matches::{self, MatchStatus};
use sea_orm::{ActiveModelTrait, Set, TransactionTrait};

pub async fn create_match<S: StateTrait>(
    State(state): State<S>,
    Json(request): Json<Schedule>,
) -> Result<Envelope<MatchDetails>> {
    let txn = state.db().begin().await?;

    request.check_teams(&txn).await?;

    let game = matches::ActiveModel {
        home_team_id: Set(request.home_team_id),
        away_team_id: Set(request.away_team_id),
        match_date: Set(request.match_date),
        match_time: Set(request.match_time),
        status: Set(MatchStatus::Scheduled),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;

    let details = load_match(state.db(), game).await?;

    Ok(Envelope::created("match created successfully", details))
}

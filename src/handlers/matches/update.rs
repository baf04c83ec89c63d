use super::Schedule;
use crate::{
    error,
    extractors::{Json, Path},
    response::Envelope,
    utils::loaders::{load_match, MatchDetails},
    Result, StateTrait,
};
use axum::extract::State;
use entity::{matches, SoftDelete};
use sea_orm::{ActiveModelTrait, IntoActiveModel, QuerySelect, Set, TransactionTrait};

/// Reschedules a match. Completed matches are immutable.
pub async fn update_match<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
    Json(request): Json<Schedule>,
) -> Result<Envelope<MatchDetails>> {
    let txn = state.db().begin().await?;

    let game = matches::Entity::find_active_by_id(id)
        .lock_exclusive()
        .one(&txn)
        .await?
        .ok_or(error::MATCH_NOT_FOUND)?;

    if game.is_completed() {
        return Err(error::MATCH_ALREADY_COMPLETED);
    }

    request.check_teams(&txn).await?;

    let mut game = game.into_active_model();
    game.home_team_id = Set(request.home_team_id);
    game.away_team_id = Set(request.away_team_id);
    game.match_date = Set(request.match_date);
    game.match_time = Set(request.match_time);

    let game = game.update(&txn).await?;

    txn.commit().await?;

    let details = load_match(state.db(), game).await?;

    Ok(Envelope::ok("match updated successfully", details))
}

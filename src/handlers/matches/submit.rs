use crate::{
    error,
    extractors::{Path, ValidatedJson},
    response::Envelope,
    utils::{
        loaders::{load_result, ResultDetails},
        scoring::{Side, Tally},
    },
    Result, StateTrait,
};
use axum::extract::State;
use entity::{
    goals, match_results,
    matches::{self, MatchStatus},
    players, SoftDelete,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter, QuerySelect, Set,
    TransactionTrait,
};
use serde::Deserialize;
use std::collections::HashMap;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct Goal {
    player_id: i32,
    #[validate(range(min = 1, max = 120))]
    minute: i32,
}

#[derive(Deserialize, Validate)]
pub struct Request {
    #[validate(range(min = 0))]
    home_score: i32,
    #[validate(range(min = 0))]
    away_score: i32,
    #[serde(default)]
    #[validate(nested)]
    goals: Vec<Goal>,
}

/// Creates or replaces the result of a match and marks it completed.
///
/// Every scorer has to play for one of the two teams and the goals per side
/// have to add up to the submitted scores. Previous goals are soft deleted.
/// Everything happens in one transaction while the match row is locked.
pub async fn submit_result<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<Envelope<ResultDetails>> {
    let txn = state.db().begin().await?;

    let game = matches::Entity::find_active_by_id(id)
        .lock_exclusive()
        .one(&txn)
        .await?
        .ok_or(error::MATCH_NOT_FOUND)?;

    let player_ids: Vec<i32> = request.goals.iter().map(|goal| goal.player_id).collect();
    let scorers: HashMap<i32, players::Model> = if player_ids.is_empty() {
        HashMap::new()
    } else {
        players::Entity::find_active()
            .filter(players::Column::Id.is_in(player_ids))
            .all(&txn)
            .await?
            .into_iter()
            .map(|player| (player.id, player))
            .collect()
    };

    let mut tally = Tally::default();

    for goal in &request.goals {
        let player = scorers
            .get(&goal.player_id)
            .ok_or(error::PLAYER_NOT_FOUND)?;
        let side = Side::of(&game, player.team_id).ok_or(error::PLAYER_NOT_IN_MATCH)?;

        tally.count(side);
    }

    if !tally.reconciles(request.home_score, request.away_score) {
        return Err(error::SCORE_MISMATCH);
    }

    let existing = match_results::Entity::find_by_match(game.id)
        .lock_exclusive()
        .one(&txn)
        .await?;

    let result = match existing {
        Some(result) => {
            let replaced = goals::Entity::soft_delete()
                .filter(goals::Column::MatchResultId.eq(result.id))
                .exec(&txn)
                .await?;

            debug!(
                match_id = game.id,
                goals = replaced.rows_affected,
                "replacing previous result"
            );

            let mut result = result.into_active_model();
            result.home_score = Set(request.home_score);
            result.away_score = Set(request.away_score);
            result.deleted_at = Set(None);
            result.update(&txn).await?
        }
        None => {
            match_results::ActiveModel {
                match_id: Set(game.id),
                home_score: Set(request.home_score),
                away_score: Set(request.away_score),
                ..Default::default()
            }
            .insert(&txn)
            .await?
        }
    };

    if !request.goals.is_empty() {
        let models = request.goals.iter().map(|goal| goals::ActiveModel {
            match_result_id: Set(result.id),
            player_id: Set(goal.player_id),
            minute: Set(goal.minute),
            ..Default::default()
        });

        goals::Entity::insert_many(models).exec(&txn).await?;
    }

    if !game.is_completed() {
        let mut game = game.into_active_model();
        game.status = Set(MatchStatus::Completed);
        game.update(&txn).await?;
    }

    txn.commit().await?;

    info!(
        match_id = result.match_id,
        home_score = result.home_score,
        away_score = result.away_score,
        "match result submitted"
    );

    let details = load_result(state.db(), result).await?;

    Ok(Envelope::ok("match result submitted successfully", details))
}

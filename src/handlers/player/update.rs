use super::{
    create::{check_jersey, lock_team, Request},
    PlayerWithTeam,
};
use crate::{
    error::{self, DatabaseError},
    extractors::{Path, ValidatedJson},
    response::Envelope,
    Result, StateTrait,
};
use axum::extract::State;
use entity::{
    players::{self, constraints::*},
    SoftDelete,
};
use sea_orm::{ActiveModelTrait, IntoActiveModel, QuerySelect, TransactionTrait};

pub async fn update_player<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<Envelope<PlayerWithTeam>> {
    let txn = state.db().begin().await?;

    let player = players::Entity::find_active_by_id(id)
        .lock_exclusive()
        .one(&txn)
        .await?
        .ok_or(error::PLAYER_NOT_FOUND)?;

    let team = lock_team(&txn, request.team_id).await?;
    check_jersey(&txn, team.id, request.jersey_number, Some(player.id)).await?;

    let mut player = player.into_active_model();
    request.apply(&mut player);

    let player = match player.update(&txn).await {
        Err(err) if err.unique_violation(UC_PLAYERS_TEAM_ID_JERSEY_NUMBER) => {
            return Err(error::JERSEY_NUMBER_TAKEN)
        }
        r => r?,
    };

    txn.commit().await?;

    Ok(Envelope::ok(
        "player updated successfully",
        PlayerWithTeam::new(player, Some(team)),
    ))
}

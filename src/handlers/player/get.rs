use super::PlayerWithTeam;
use crate::{error, extractors::Path, response::Envelope, Result, StateTrait};
use axum::extract::State;
use entity::{players, teams, SoftDelete};

pub async fn get_player<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
) -> Result<Envelope<PlayerWithTeam>> {
    let (player, team) = players::Entity::find_active_by_id(id)
        .find_also_related(teams::Entity)
        .one(state.db())
        .await?
        .ok_or(error::PLAYER_NOT_FOUND)?;

    Ok(Envelope::ok(
        "player retrieved successfully",
        PlayerWithTeam::new(player, team),
    ))
}

use crate::{error, extractors::Path, response::Envelope, Result, StateTrait};
use axum::extract::State;
use entity::{players, teams, SoftDelete};
use sea_orm::{ColumnTrait, QueryFilter, QueryOrder};
use serde::Serialize;

#[derive(Serialize)]
pub struct Response {
    #[serde(flatten)]
    team: teams::Model,
    players: Vec<players::Model>,
}

pub async fn get_team<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
) -> Result<Envelope<Response>> {
    let team = teams::Entity::find_active_by_id(id)
        .one(state.db())
        .await?
        .ok_or(error::TEAM_NOT_FOUND)?;

    let players = players::Entity::find_active()
        .filter(players::Column::TeamId.eq(team.id))
        .order_by_asc(players::Column::JerseyNumber)
        .all(state.db())
        .await?;

    Ok(Envelope::ok(
        "team retrieved successfully",
        Response { team, players },
    ))
}

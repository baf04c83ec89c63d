use crate::{error, extractors::Path, response::Envelope, Result, StateTrait};
use axum::extract::State;
use entity::{players, teams, SoftDelete};
use sea_orm::{ColumnTrait, PaginatorTrait, QueryFilter, QueryOrder};

pub async fn team_players<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
) -> Result<Envelope<Vec<players::Model>>> {
    let exists = teams::Entity::find_active_by_id(id)
        .count(state.db())
        .await?
        > 0;

    if !exists {
        return Err(error::TEAM_NOT_FOUND);
    }

    let players = players::Entity::find_active()
        .filter(players::Column::TeamId.eq(id))
        .order_by_asc(players::Column::JerseyNumber)
        .all(state.db())
        .await?;

    let total = players.len() as u64;

    Ok(Envelope::ok("players retrieved successfully", players).with_total(total))
}

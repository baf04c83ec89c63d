use super::PlayerWithTeam;
use crate::{extractors::Query, response::Envelope, Result, StateTrait};
use axum::extract::State;
use entity::{
    players::{self, Position},
    teams, SoftDelete,
};
use sea_orm::{ColumnTrait, PaginatorTrait, QueryFilter, QueryOrder};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct Filter {
    team_id: Option<i32>,
    position: Option<Position>,
}

pub async fn list_players<S: StateTrait>(
    State(state): State<S>,
    Query(filter): Query<Filter>,
) -> Result<Envelope<Vec<PlayerWithTeam>>> {
    let mut query = players::Entity::find_active();

    if let Some(team_id) = filter.team_id {
        query = query.filter(players::Column::TeamId.eq(team_id));
    }

    if let Some(position) = filter.position {
        query = query.filter(players::Column::Position.eq(position));
    }

    let total = query.clone().count(state.db()).await?;

    let players = query
        .order_by_asc(players::Column::Id)
        .find_also_related(teams::Entity)
        .all(state.db())
        .await?
        .into_iter()
        .map(|(player, team)| PlayerWithTeam::new(player, team))
        .collect();

    Ok(Envelope::ok("players retrieved successfully", players).with_total(total))
}

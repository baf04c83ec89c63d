mod create;
mod delete;
mod get;
mod list;
mod update;

use crate::StateTrait;
use axum::{routing::get, Router};
use entity::{players, teams};
use serde::Serialize;

/// Routes for player management
///
/// GET    /players?team_id=&position=
/// POST   /players
/// GET    /players/:id
/// PUT    /players/:id
/// DELETE /players/:id
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route(
            "/",
            get(list::list_players::<S>).post(create::create_player::<S>),
        )
        .route(
            "/:id",
            get(get::get_player::<S>)
                .put(update::update_player::<S>)
                .delete(delete::delete_player::<S>),
        )
}

/// A player together with its team, `null` once the team is soft deleted.
#[derive(Serialize)]
pub struct PlayerWithTeam {
    #[serde(flatten)]
    player: players::Model,
    team: Option<teams::Model>,
}

impl PlayerWithTeam {
    fn new(player: players::Model, team: Option<teams::Model>) -> Self {
        Self {
            player,
            team: team.filter(|team| team.deleted_at.is_none()),
        }
    }
}

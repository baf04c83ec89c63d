mod create;
mod delete;
mod get;
mod list;
mod players;
mod update;

use crate::StateTrait;
use axum::{routing::get, Router};

/// Routes for team management
///
/// GET    /teams?city=
/// POST   /teams
/// GET    /teams/:id
/// PUT    /teams/:id
/// DELETE /teams/:id
/// GET    /teams/:id/players
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route(
            "/",
            get(list::list_teams::<S>).post(create::create_team::<S>),
        )
        .route(
            "/:id",
            get(get::get_team::<S>)
                .put(update::update_team::<S>)
                .delete(delete::delete_team::<S>),
        )
        .route("/:id/players", get(players::team_players::<S>))
}

mod create;
mod delete;
mod get;
mod list;
mod result;
mod submit;
mod update;

use crate::{error, Result, StateTrait};
use axum::{
    routing::{get, post},
    Router,
};
use chrono::{NaiveDate, NaiveTime};
use entity::{teams, SoftDelete};
use sea_orm::{ConnectionTrait, QuerySelect};
use serde::Deserialize;

/// Routes for match management
///
/// GET    /matches?status=
/// POST   /matches
/// GET    /matches/:id
/// PUT    /matches/:id
/// DELETE /matches/:id
///
/// POST   /matches/:id/result
/// GET    /matches/:id/result
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route(
            "/",
            get(list::list_matches::<S>).post(create::create_match::<S>),
        )
        .route(
            "/:id",
            get(get::get_match::<S>)
                .put(update::update_match::<S>)
                .delete(delete::delete_match::<S>),
        )
        .route(
            "/:id/result",
            post(submit::submit_result::<S>).get(result::get_result::<S>),
        )
}

/// Body of both scheduling endpoints.
#[derive(Deserialize)]
pub struct Schedule {
    pub home_team_id: i32,
    pub away_team_id: i32,
    pub match_date: NaiveDate,
    #[serde(deserialize_with = "crate::utils::deserialize_match_time")]
    pub match_time: NaiveTime,
}

impl Schedule {
    /// Both teams have to be different and live. The rows stay share-locked
    /// until the surrounding transaction ends.
    async fn check_teams<C: ConnectionTrait>(&self, db: &C) -> Result {
        if self.home_team_id == self.away_team_id {
            return Err(error::SAME_TEAMS);
        }

        teams::Entity::find_active_by_id(self.home_team_id)
            .lock_shared()
            .one(db)
            .await?
            .ok_or(error::HOME_TEAM_NOT_FOUND)?;

        teams::Entity::find_active_by_id(self.away_team_id)
            .lock_shared()
            .one(db)
            .await?
            .ok_or(error::AWAY_TEAM_NOT_FOUND)?;

        Ok(())
    }
}

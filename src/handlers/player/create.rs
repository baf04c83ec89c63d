use super::PlayerWithTeam;
use crate::{
    error::{self, DatabaseError},
    extractors::ValidatedJson,
    response::Envelope,
    Result, StateTrait,
};
use axum::extract::State;
use entity::{
    players::{self, constraints::*, Position},
    teams, SoftDelete,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, PaginatorTrait, QueryFilter, QuerySelect, Set,
    TransactionTrait,
};
use serde::Deserialize;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct Request {
    pub team_id: i32,
    #[validate(length(min = 2, max = 100))]
    pub name: String,
    #[validate(range(min = 100.0, max = 250.0))]
    pub height: f64,
    #[validate(range(min = 30.0, max = 200.0))]
    pub weight: f64,
    pub position: Position,
    #[validate(range(min = 1, max = 99))]
    pub jersey_number: i32,
}

impl Request {
    pub fn apply(self, model: &mut players::ActiveModel) {
        model.team_id = Set(self.team_id);
        model.name = Set(self.name);
        model.height = Set(self.height);
        model.weight = Set(self.weight);
        model.position = Set(self.position);
        model.jersey_number = Set(self.jersey_number);
    }
}

/// Locks the team row for the rest of the transaction so it cannot be
/// deleted while a player is being added to it.
pub(super) async fn lock_team<C: ConnectionTrait>(db: &C, team_id: i32) -> Result<teams::Model> {
    teams::Entity::find_active_by_id(team_id)
        .lock_shared()
        .one(db)
        .await?
        .ok_or(error::TEAM_NOT_FOUND)
}

/// Fails with `JERSEY_NUMBER_TAKEN` when a live player of the team other than
/// `except` already wears the number.
pub(super) async fn check_jersey<C: ConnectionTrait>(
    db: &C,
    team_id: i32,
    jersey_number: i32,
    except: Option<i32>,
) -> Result {
    let mut query = players::Entity::find_by_jersey(team_id, jersey_number);

    if let Some(id) = except {
        query = query.filter(players::Column::Id.ne(id));
    }

    if query.count(db).await? > 0 {
        return Err(error::JERSEY_NUMBER_TAKEN);
    }

    Ok(())
}

pub async fn create_player<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<Envelope<PlayerWithTeam>> {
    let txn = state.db().begin().await?;

    let team = lock_team(&txn, request.team_id).await?;
    check_jersey(&txn, team.id, request.jersey_number, None).await?;

    let mut player = <players::ActiveModel as Default>::default();
    request.apply(&mut player);

    let player = match player.insert(&txn).await {
        Err(err) if err.unique_violation(UC_PLAYERS_TEAM_ID_JERSEY_NUMBER) => {
            return Err(error::JERSEY_NUMBER_TAKEN)
        }
        r => r?,
    };

    txn.commit().await?;

    Ok(Envelope::created(
        "player created successfully",
        PlayerWithTeam::new(player, Some(team)),
    ))
}

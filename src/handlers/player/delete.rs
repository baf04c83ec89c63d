use crate::{error, extractors::Path, response::Envelope, Result, StateTrait};
use axum::extract::State;
use entity::{players, SoftDelete};
use sea_orm::{ColumnTrait, QueryFilter};

pub async fn delete_player<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
) -> Result<Envelope<()>> {
    let res = players::Entity::soft_delete()
        .filter(players::Column::Id.eq(id))
        .exec(state.db())
        .await?;

    if res.rows_affected == 0 {
        return Err(error::PLAYER_NOT_FOUND);
    }

    info!(player_id = id, "player deleted");

    Ok(Envelope::ok("player deleted successfully", ()))
}

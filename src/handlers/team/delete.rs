use crate::{error, extractors::Path, response::Envelope, Result, StateTrait};
use axum::extract::State;
use entity::{teams, SoftDelete};
use sea_orm::{ColumnTrait, QueryFilter};

/// Soft delete. Players, matches and goals referencing the team stay.
pub async fn delete_team<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
) -> Result<Envelope<()>> {
    let res = teams::Entity::soft_delete()
        .filter(teams::Column::Id.eq(id))
        .exec(state.db())
        .await?;

    if res.rows_affected == 0 {
        return Err(error::TEAM_NOT_FOUND);
    }

    info!(team_id = id, "team deleted");

    Ok(Envelope::ok("team deleted successfully", ()))
}

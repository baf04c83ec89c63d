use crate::{error, extractors::Path, response::Envelope, Result, StateTrait};
use axum::extract::State;
use entity::{matches, SoftDelete};
use sea_orm::{ColumnTrait, QueryFilter};

/// Soft delete. The result and its goals are kept.
pub async fn delete_match<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
) -> Result<Envelope<()>> {
    let res = matches::Entity::soft_delete()
        .filter(matches::Column::Id.eq(id))
        .exec(state.db())
        .await?;

    if res.rows_affected == 0 {
        return Err(error::MATCH_NOT_FOUND);
    }

    info!(match_id = id, "match deleted");

    Ok(Envelope::ok("match deleted successfully", ()))
}

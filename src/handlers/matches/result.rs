use crate::{
    error,
    extractors::Path,
    response::Envelope,
    utils::loaders::{load_result, ResultDetails},
    Result, StateTrait,
};
use axum::extract::State;
use entity::{match_results, matches, SoftDelete};
use sea_orm::{ColumnTrait, QueryFilter};

pub async fn get_result<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
) -> Result<Envelope<ResultDetails>> {
    let game = matches::Entity::find_active_by_id(id)
        .one(state.db())
        .await?
        .ok_or(error::MATCH_NOT_FOUND)?;

    let result = match_results::Entity::find_by_match(game.id)
        .filter(match_results::Column::DeletedAt.is_null())
        .one(state.db())
        .await?
        .ok_or(error::RESULT_NOT_FOUND)?;

    let details = load_result(state.db(), result).await?;

    Ok(Envelope::ok("match result retrieved successfully", details))
}

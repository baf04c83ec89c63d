use crate::{
    error,
    extractors::Path,
    response::Envelope,
    utils::loaders::{load_match, MatchDetails},
    Result, StateTrait,
};
use axum::extract::State;
use entity::{matches, SoftDelete};

pub async fn get_match<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
) -> Result<Envelope<MatchDetails>> {
    let game = matches::Entity::find_active_by_id(id)
        .one(state.db())
        .await?
        .ok_or(error::MATCH_NOT_FOUND)?;

    let details = load_match(state.db(), game).await?;

    Ok(Envelope::ok("match retrieved successfully", details))
}

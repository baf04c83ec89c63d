use crate::{
    extractors::Query,
    response::Envelope,
    utils::loaders::{load_matches, MatchDetails},
    Result, StateTrait,
};
use axum::extract::State;
use entity::{
    matches::{self, MatchStatus},
    SoftDelete,
};
use sea_orm::{ColumnTrait, PaginatorTrait, QueryFilter, QueryOrder};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct Filter {
    status: Option<MatchStatus>,
}

pub async fn list_matches<S: StateTrait>(
    State(state): State<S>,
    Query(filter): Query<Filter>,
) -> Result<Envelope<Vec<MatchDetails>>> {
    let mut query = matches::Entity::find_active();

    if let Some(status) = filter.status {
        query = query.filter(matches::Column::Status.eq(status));
    }

    let total = query.clone().count(state.db()).await?;

    let games = query
        .order_by_asc(matches::Column::MatchDate)
        .order_by_asc(matches::Column::MatchTime)
        .order_by_asc(matches::Column::Id)
        .all(state.db())
        .await?;

    let details = load_matches(state.db(), games).await?;

    Ok(Envelope::ok("matches retrieved successfully", details).with_total(total))
}

use super::Summary;
use crate::{response::Envelope, utils::loaders::load_teams, Result, StateTrait};
use axum::extract::State;
use entity::{
    match_results,
    matches::{self, MatchStatus},
    SoftDelete,
};
use sea_orm::{ColumnTrait, QueryFilter, QueryOrder};

/// One summary per completed match that has a live result.
pub async fn list_reports<S: StateTrait>(
    State(state): State<S>,
) -> Result<Envelope<Vec<Summary>>> {
    let rows = matches::Entity::find_active()
        .filter(matches::Column::Status.eq(MatchStatus::Completed))
        .find_also_related(match_results::Entity)
        .order_by_asc(matches::Column::MatchDate)
        .order_by_asc(matches::Column::MatchTime)
        .order_by_asc(matches::Column::Id)
        .all(state.db())
        .await?;

    let rows: Vec<_> = rows
        .into_iter()
        .filter_map(|(game, result)| {
            result
                .filter(|result| result.deleted_at.is_none())
                .map(|result| (game, result))
        })
        .collect();

    let team_ids: Vec<i32> = rows
        .iter()
        .flat_map(|(game, _)| [game.home_team_id, game.away_team_id])
        .collect();
    let teams = load_teams(state.db(), &team_ids).await?;

    let reports: Vec<Summary> = rows
        .iter()
        .map(|(game, result)| Summary::new(game, result, &teams))
        .collect();
    let total = reports.len() as u64;

    Ok(Envelope::ok("reports retrieved successfully", reports).with_total(total))
}

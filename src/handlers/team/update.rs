use super::create::Request;
use crate::{
    error,
    extractors::{Path, ValidatedJson},
    response::Envelope,
    Result, StateTrait,
};
use axum::extract::State;
use entity::{teams, SoftDelete};
use sea_orm::{ActiveModelTrait, IntoActiveModel};

pub async fn update_team<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<Envelope<teams::Model>> {
    let team = teams::Entity::find_active_by_id(id)
        .one(state.db())
        .await?
        .ok_or(error::TEAM_NOT_FOUND)?;

    let mut team = team.into_active_model();
    request.apply(&mut team);

    let team = team.update(state.db()).await?;

    Ok(Envelope::ok("team updated successfully", team))
}

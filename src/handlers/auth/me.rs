use crate::{error, jwt::Claims, response::Envelope, Result, StateTrait};
use axum::extract::State;
use entity::{users, SoftDelete};

pub async fn me<S: StateTrait>(
    State(state): State<S>,
    claims: Claims,
) -> Result<Envelope<users::Model>> {
    let user = users::Entity::find_active_by_id(claims.user_id)
        .one(state.db())
        .await?
        .ok_or(error::USER_NOT_FOUND)?;

    Ok(Envelope::ok("profile retrieved", user))
}

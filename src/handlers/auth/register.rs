use crate::{
    error::{self, DatabaseError},
    extractors::ValidatedJson,
    response::Envelope,
    Result, StateTrait,
};
use axum::extract::State;
use entity::users::{self, constraints::*};
use sea_orm::{ActiveModelTrait, Set};
use serde::Deserialize;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct Request {
    #[validate(length(min = 3, max = 50))]
    username: String,
    #[validate(email)]
    email: String,
    #[validate(length(min = 6))]
    password: String,
}

pub async fn register<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<Envelope<users::Model>> {
    let Request {
        username,
        email,
        password,
    } = request;

    let hash =
        tokio::task::spawn_blocking(move || bcrypt::hash(password, bcrypt::DEFAULT_COST)).await??;

    let user = users::ActiveModel {
        username: Set(username),
        email: Set(email),
        password: Set(hash),
        role: Set(users::DEFAULT_ROLE.to_owned()),
        ..Default::default()
    };

    let user = match user.insert(state.db()).await {
        Err(err) if err.unique_violation(UC_USERS_EMAIL) => return Err(error::EMAIL_TAKEN),
        Err(err) if err.unique_violation(UC_USERS_USERNAME) => return Err(error::USERNAME_TAKEN),
        r => r?,
    };

    info!(user_id = user.id, "user registered");

    Ok(Envelope::created("user registered successfully", user))
}

use crate::{error, extractors::ValidatedJson, response::Envelope, Result, StateTrait};
use axum::extract::State;
use entity::users;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct Request {
    #[validate(email)]
    email: String,
    #[validate(length(min = 1))]
    password: String,
}

#[derive(Serialize)]
pub struct Response {
    token: String,
    user: users::Model,
}

pub async fn login<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<Envelope<Response>> {
    let Some(user) = users::Entity::find_by_email(&request.email)
        .one(state.db())
        .await?
    else {
        return Err(error::INVALID_CREDENTIALS);
    };

    let hash = user.password.clone();
    let valid =
        tokio::task::spawn_blocking(move || bcrypt::verify(request.password, &hash)).await??;

    if !valid {
        debug!(user_id = user.id, "wrong password");
        return Err(error::INVALID_CREDENTIALS);
    }

    let token = state.jwt().issue(&user)?;

    Ok(Envelope::ok("login successful", Response { token, user }))
}

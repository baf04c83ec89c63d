mod login;
mod me;
mod register;

use crate::StateTrait;
use axum::{
    routing::{get, post},
    Router,
};

/// POST /auth/register
/// POST /auth/login
pub fn public_routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route("/auth/register", post(register::register::<S>))
        .route("/auth/login", post(login::login::<S>))
}

/// GET  /auth/me
pub fn protected_routes<S: StateTrait>() -> Router<S> {
    Router::new().route("/auth/me", get(me::me::<S>))
}

mod auth;
mod matches;
mod player;
mod report;
mod team;

use crate::{middlewares::require_claims, response::Envelope, Result, StateTrait};
use axum::{extract::State, middleware, routing::get, Router};
use sea_orm::ConnectionTrait;
use serde::Serialize;

/// GET  /health
///
/// POST /api/auth/register
/// POST /api/auth/login
///
/// Everything else under `/api` needs a bearer token.
pub fn routes<S: StateTrait>() -> Router<S> {
    let protected = Router::new()
        .merge(auth::protected_routes::<S>())
        .nest("/teams", team::routes::<S>())
        .nest("/players", player::routes::<S>())
        .nest("/matches", matches::routes::<S>())
        .nest("/reports", report::routes::<S>())
        .route_layer(middleware::from_fn(require_claims));

    Router::new()
        .nest(
            "/api",
            Router::new()
                .merge(auth::public_routes::<S>())
                .merge(protected),
        )
        .route("/health", get(health::<S>))
}

#[derive(Serialize)]
struct Health {
    version: &'static str,
}

async fn health<S: StateTrait>(State(state): State<S>) -> Result<Envelope<Health>> {
    state.db().execute_unprepared("select 1").await?;

    Ok(Envelope::ok(
        "service is healthy",
        Health {
            version: env!("CARGO_PKG_VERSION"),
        },
    ))
}

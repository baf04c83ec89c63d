use crate::{error, jwt::Claims, Result, StateTrait};
use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use headers::{authorization::Bearer, Authorization, HeaderMapExt};
use tracing::Instrument;

/// Decodes the bearer token, if any, and stores its claims in the request
/// extensions. Never rejects, `require_claims` does that per route.
pub async fn get_claims<S: StateTrait>(
    State(state): State<S>,
    mut request: Request,
    next: Next,
) -> Response {
    let Some(header) = request.headers().typed_get::<Authorization<Bearer>>() else {
        return next.run(request).await;
    };

    let Ok(claims) = state.jwt().get_claims(header.token()) else {
        return next.run(request).await;
    };

    let span = info_span!("claims", user_id = claims.user_id);

    request.extensions_mut().insert(claims);

    next.run(request).instrument(span).await
}

pub async fn require_claims(request: Request, next: Next) -> Result<Response> {
    if request.extensions().get::<Claims>().is_some() {
        return Ok(next.run(request).await);
    }

    if request.headers().contains_key(AUTHORIZATION) {
        Err(error::INVALID_TOKEN)
    } else {
        Err(error::MISSING_TOKEN)
    }
}

mod claims;

use crate::StateTrait;
use axum::{
    extract::Request,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderName, Method,
    },
    middleware, Router,
};
pub use claims::require_claims;
use std::iter;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::MakeRequestUuid,
    trace::TraceLayer,
    ServiceBuilderExt,
};
use tracing::Span;

static X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Any origin may call the API, but only with the verbs and headers it uses.
fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
        .expose_headers([X_REQUEST_ID.clone()])
}

fn request_span(request: &Request) -> Span {
    let request_id = request
        .headers()
        .get(&X_REQUEST_ID)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        request_id,
    )
}

pub fn middlewares<S: StateTrait>(state: S, router: Router<S>) -> Router {
    let layers = ServiceBuilder::new()
        .catch_panic()
        .sensitive_headers(iter::once(AUTHORIZATION))
        .set_x_request_id(MakeRequestUuid)
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
        .propagate_x_request_id()
        .layer(cors())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            claims::get_claims::<S>,
        ))
        .compression()
        .decompression()
        .into_inner();

    router.layer(layers).with_state(state)
}

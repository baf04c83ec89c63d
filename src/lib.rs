#[macro_use]
extern crate tracing;

pub mod config;
pub mod error;
mod extractors;
mod handlers;
pub mod jwt;
mod middlewares;
mod response;
mod state;
mod utils;

use crate::{middlewares::middlewares, utils::shutdown_signal};
pub use config::Config;
use error::{Error, Result};
pub use state::*;
use tokio::net::TcpListener;
pub use utils::panic;

pub async fn run<S: StateTrait>(listener: TcpListener, state: S) -> anyhow::Result<()> {
    info!("listening on port {}", listener.local_addr()?.port());

    let routes = handlers::routes::<S>();
    let app = middlewares(state, routes);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");

    Ok(())
}

use football_backend::{Config, State};
use std::net::{Ipv4Addr, SocketAddr};
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_line_number(true)
        .init();

    football_backend::panic::set_hook();

    let config = Config::from_env().inspect_err(|error| {
        tracing::error!("invalid configuration: {error:#}");
    })?;

    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, config.port));
    let listener = TcpListener::bind(addr).await?;
    let state = State::new(&config).await?;

    football_backend::run(listener, state).await
}

use crate::{db::Database, JWT_SECRET};
use football_backend::{Config, State};
use std::{
    net::{Ipv4Addr, SocketAddr},
    thread,
};
use tokio::{net::TcpListener, sync::oneshot};

/// A backend instance serving on an ephemeral localhost port.
#[derive(Debug)]
pub(crate) struct Server {
    pub(crate) addr: SocketAddr,
    pub(crate) db: Database,
}

fn config() -> Config {
    Config {
        database_url: String::new(),
        jwt_secret: JWT_SECRET.to_owned(),
        jwt_expiration_hours: 24,
        port: 0,
    }
}

/// Starts the server on a runtime of its own, so it keeps running while the
/// per-test runtimes come and go.
pub(crate) async fn spawn() -> Server {
    let (ready_tx, ready_rx) = oneshot::channel();

    thread::Builder::new()
        .name("test-server".to_owned())
        .spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("failed to build server runtime");

            rt.block_on(async move {
                let db = Database::setup().await;
                let state = State::with_database(&config(), db.conn());

                let listener = TcpListener::bind(SocketAddr::from((Ipv4Addr::LOCALHOST, 0)))
                    .await
                    .expect("failed to bind test listener");
                let addr = listener.local_addr().expect("listener has no address");

                tracing::debug!(%addr, "test server listening");

                ready_tx
                    .send(Server { addr, db })
                    .expect("test harness went away");

                football_backend::run(listener, state)
                    .await
                    .expect("test server crashed");
            });
        })
        .expect("failed to spawn server thread");

    ready_rx.await.expect("test server failed to start")
}

#[cfg(unix)]
use smallvec::SmallVec;
#[cfg(unix)]
use std::{future::poll_fn, task::Poll};
#[cfg(unix)]
use tokio::signal::unix::{signal, Signal, SignalKind};

/// Completes on the first SIGINT, SIGTERM or SIGQUIT.
#[cfg(unix)]
pub async fn shutdown_signal() {
    let mut listeners: SmallVec<[(SignalKind, Signal); 3]> = [
        SignalKind::interrupt(),
        SignalKind::terminate(),
        SignalKind::quit(),
    ]
    .into_iter()
    .filter_map(|kind| match signal(kind) {
        Ok(listener) => Some((kind, listener)),
        Err(error) => {
            error!("failed to listen for {:?}: {}", kind, error);
            None
        }
    })
    .collect();

    if listeners.is_empty() {
        warn!("no signal listener installed, falling back to ctrl-c");
        ctrl_c().await;
        return;
    }

    let kind = poll_fn(|cx| {
        for (kind, listener) in &mut listeners {
            if listener.poll_recv(cx).is_ready() {
                return Poll::Ready(*kind);
            }
        }

        Poll::Pending
    })
    .await;

    info!("received {:?}, shutting down", kind);
}

#[cfg(not(unix))]
pub async fn shutdown_signal() {
    ctrl_c().await;
}

async fn ctrl_c() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("received ctrl-c, shutting down"),
        Err(error) => {
            error!("failed to listen for ctrl-c: {}", error);
            std::future::pending::<()>().await;
        }
    }
}

use std::{future::Future, io, time::Duration};

use anyhow::Result;
use axum::Router;
use tokio::{net::TcpListener, sync::watch, task::JoinHandle};
use tracing::{info, warn};

/// Serves `router` on `listener` until `shutdown` resolves or the server
/// stops on its own, whichever happens first.
///
/// After `shutdown` resolves, in-flight requests get at most `grace` to finish.
/// An error from `shutdown` is still returned, but only after the server has
/// been told to stop.
pub async fn serve_until<F>(
    listener: TcpListener,
    router: Router,
    grace: Duration,
    shutdown: F,
) -> Result<()>
where
    F: Future<Output = io::Result<()>>,
{
    let (stop_tx, mut stop_rx) = watch::channel(false);
    let server = tokio::spawn(async move {
        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                let _ = stop_rx.changed().await;
            })
            .await
    });

    supervise(server, stop_tx, grace, shutdown).await
}

async fn supervise<F>(
    mut server: JoinHandle<io::Result<()>>,
    stop_tx: watch::Sender<bool>,
    grace: Duration,
    shutdown: F,
) -> Result<()>
where
    F: Future<Output = io::Result<()>>,
{
    tokio::select! {
        joined = &mut server => {
            warn!(
                event_name = "system.server.exited",
                correlation_id = "shutdown",
                "server stopped before any shutdown signal"
            );
            joined??;
            Ok(())
        }
        signal = shutdown => {
            info!(
                event_name = "system.server.stopping",
                correlation_id = "shutdown",
                grace_secs = grace.as_secs(),
                "pizzeria-server stopping"
            );
            let _ = stop_tx.send(true);

            match tokio::time::timeout(grace, server).await {
                Ok(joined) => joined??,
                Err(_) => warn!(
                    event_name = "system.server.shutdown_timeout",
                    correlation_id = "shutdown",
                    "open connections outlived the shutdown window"
                ),
            }

            signal?;
            Ok(())
        }
    }
}

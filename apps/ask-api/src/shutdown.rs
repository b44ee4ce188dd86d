use axum::Router;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal;
use tokio::sync::Notify;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownOutcome {
    /// Every open connection finished before the deadline.
    Drained,
    /// The drain deadline passed and the server was stopped with requests still in flight.
    DeadlineExceeded,
}

/// Resolves on Ctrl+C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("received SIGTERM, initiating graceful shutdown");
        }
    }
}

/// Serves `app` until `signal` resolves, then lets open connections drain
/// for at most `drain_timeout` before stopping the server.
pub async fn serve_with_drain_deadline<S>(
    listener: TcpListener,
    app: Router,
    signal: S,
    drain_timeout: Duration,
) -> std::io::Result<ShutdownOutcome>
where
    S: Future<Output = ()>,
{
    let stop = Arc::new(Notify::new());
    let server_stop = Arc::clone(&stop);

    let mut server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move { server_stop.notified().await })
            .await
    });

    tokio::select! {
        result = &mut server => return join_result(result).map(|_| ShutdownOutcome::Drained),
        _ = signal => {}
    }

    // notify_one keeps a permit if the server has not polled its shutdown future yet
    stop.notify_one();
    tracing::info!(
        timeout_secs = drain_timeout.as_secs_f64(),
        "allowing connections to drain"
    );

    match tokio::time::timeout(drain_timeout, &mut server).await {
        Ok(result) => join_result(result).map(|_| ShutdownOutcome::Drained),
        Err(_) => {
            tracing::warn!(
                timeout_secs = drain_timeout.as_secs_f64(),
                "connections still open after drain timeout, forcing shutdown"
            );
            server.abort();
            Ok(ShutdownOutcome::DeadlineExceeded)
        }
    }
}

fn join_result(
    result: Result<std::io::Result<()>, tokio::task::JoinError>,
) -> std::io::Result<()> {
    result.map_err(std::io::Error::other)?
}

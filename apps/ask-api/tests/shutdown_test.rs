use axum::{extract::State, routing::get, Router};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::net::TcpListener;
use tokio::sync::{oneshot, Notify};

use ask_api::shutdown::{serve_with_drain_deadline, ShutdownOutcome};

async fn slow(State(started): State<Arc<Notify>>) -> &'static str {
    started.notify_one();
    tokio::time::sleep(Duration::from_secs(30)).await;
    "done"
}

async fn quick() -> &'static str {
    "done"
}

fn test_router(started: Arc<Notify>) -> Router {
    Router::new()
        .route("/slow", get(slow))
        .route("/quick", get(quick))
        .with_state(started)
}

async fn bind() -> (TcpListener, String) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    (listener, base)
}

#[tokio::test]
async fn test_drain_deadline_stops_hung_request() {
    let started = Arc::new(Notify::new());
    let (listener, base) = bind().await;
    let (stop_tx, stop_rx) = oneshot::channel::<()>();

    let server = tokio::spawn(serve_with_drain_deadline(
        listener,
        test_router(Arc::clone(&started)),
        async move {
            let _ = stop_rx.await;
        },
        Duration::from_millis(200),
    ));

    let _in_flight = tokio::spawn(async move { reqwest::get(format!("{}/slow", base)).await });
    started.notified().await;

    let began = Instant::now();
    stop_tx.send(()).unwrap();

    let outcome = tokio::time::timeout(Duration::from_secs(5), server)
        .await
        .expect("server ignored the drain deadline")
        .unwrap()
        .unwrap();

    assert_eq!(outcome, ShutdownOutcome::DeadlineExceeded);
    assert!(began.elapsed() >= Duration::from_millis(200));
}

#[tokio::test]
async fn test_idle_server_drains_before_deadline() {
    let (listener, base) = bind().await;
    let (stop_tx, stop_rx) = oneshot::channel::<()>();

    let server = tokio::spawn(serve_with_drain_deadline(
        listener,
        test_router(Arc::new(Notify::new())),
        async move {
            let _ = stop_rx.await;
        },
        Duration::from_secs(10),
    ));

    let client = reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .build()
        .unwrap();
    let body = client
        .get(format!("{}/quick", base))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(body, "done");
    drop(client);

    stop_tx.send(()).unwrap();

    let outcome = tokio::time::timeout(Duration::from_secs(5), server)
        .await
        .expect("idle server did not stop")
        .unwrap()
        .unwrap();

    assert_eq!(outcome, ShutdownOutcome::Drained);
}

#![allow(dead_code)]

use furrow_core::server::{serve_with_shutdown, PlanStore};
use tokio::{net::TcpListener, sync::oneshot};

/// A planning service running on an ephemeral local port.
pub struct TestService {
    pub base_url: String,
    pub store: PlanStore,
    _shutdown: oneshot::Sender<()>,
}

/// Helper function to start the planning service for a test
pub async fn spawn_service() -> TestService {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local address");
    let store = PlanStore::new();
    let (tx, rx) = oneshot::channel::<()>();

    let server_store = store.clone();
    tokio::spawn(async move {
        serve_with_shutdown(listener, server_store, async {
            let _ = rx.await;
        })
        .await
        .expect("Test service failed");
    });

    TestService {
        base_url: format!("http://{addr}"),
        store,
        _shutdown: tx,
    }
}

/// Helper function to get a URL nothing is listening on
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local address");
    drop(listener);
    format!("http://{addr}")
}

//! End-to-end probe behavior against a local status endpoint.
//!
//! Whatever the endpoint does, `check_status` must come back with a plain
//! reading: `Online` only when the watched mount point appears in a decodable
//! 2xx response, `Offline` for everything else.

use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use icecast_status::{StatusClient, default_client};
use mountguard::monitor::{SourceDetector, SourceStatus, StatusProbe};
use url::Url;

const MOUNT: &str = "/cantaguarico";

async fn serve(status: StatusCode, body: &'static str) -> SocketAddr {
    let app = Router::new().route("/status-json.xsl", get(move || async move { (status, body) }));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn detector_for(addr: SocketAddr) -> SourceDetector {
    let endpoint = Url::parse(&format!("http://{addr}/status-json.xsl")).unwrap();
    SourceDetector::new(StatusClient::new(
        endpoint,
        default_client(Duration::from_secs(5)),
    ))
}

#[tokio::test]
async fn connected_source_reads_online() {
    let addr = serve(
        StatusCode::OK,
        r#"{"icestats":{"source":{"listenurl":"http://x/cantaguarico","mount":""}}}"#,
    )
    .await;

    assert_eq!(
        detector_for(addr).check_status(MOUNT).await,
        SourceStatus::Online
    );
}

#[tokio::test]
async fn absent_source_reads_offline() {
    let addr = serve(StatusCode::OK, r#"{"icestats":{}}"#).await;

    assert_eq!(
        detector_for(addr).check_status(MOUNT).await,
        SourceStatus::Offline
    );
}

#[tokio::test]
async fn other_mounts_read_offline() {
    let addr = serve(
        StatusCode::OK,
        r#"{"icestats":{"source":[{"listenurl":"http://x/other","mount":"/other"}]}}"#,
    )
    .await;

    assert_eq!(
        detector_for(addr).check_status(MOUNT).await,
        SourceStatus::Offline
    );
}

#[tokio::test]
async fn server_error_reads_offline() {
    let addr = serve(StatusCode::INTERNAL_SERVER_ERROR, "busy").await;

    assert_eq!(
        detector_for(addr).check_status(MOUNT).await,
        SourceStatus::Offline
    );
}

#[tokio::test]
async fn malformed_body_reads_offline() {
    let addr = serve(StatusCode::OK, "<html>not json</html>").await;

    assert_eq!(
        detector_for(addr).check_status(MOUNT).await,
        SourceStatus::Offline
    );
}

#[tokio::test]
async fn timed_out_poll_reads_offline() {
    // The handler hangs well past the client timeout.
    let app = Router::new().route(
        "/status-json.xsl",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(30)).await;
            r#"{"icestats":{}}"#
        }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let endpoint = Url::parse(&format!("http://{addr}/status-json.xsl")).unwrap();
    let detector = SourceDetector::new(StatusClient::new(
        endpoint,
        default_client(Duration::from_millis(200)),
    ));

    assert_eq!(detector.check_status(MOUNT).await, SourceStatus::Offline);
}

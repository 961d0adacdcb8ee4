#![cfg(feature = "web-interface")]

use axum::{http::StatusCode, routing::get, Router};
use calview::components::{FeedSource, HttpFeedFetcher};
use calview::error::Error;
use std::net::SocketAddr;
use std::time::Duration;
use url::Url;

const SAMPLE: &str = include_str!("fixtures/sample.ics");

/// Start a local stand-in for the remote feed host
async fn spawn_feed_server() -> SocketAddr {
    let app = Router::new()
        .route("/basic.ics", get(|| async { SAMPLE }))
        .route(
            "/missing.ics",
            get(|| async { (StatusCode::NOT_FOUND, "not found") }),
        )
        .route(
            "/slow.ics",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                SAMPLE
            }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn fetcher(addr: SocketAddr, path: &str, timeout: Duration) -> HttpFeedFetcher {
    let url = Url::parse(&format!("http://{}{}", addr, path)).unwrap();
    HttpFeedFetcher::new(url, timeout).unwrap()
}

#[tokio::test]
async fn test_fetch_success() {
    let addr = spawn_feed_server().await;

    let body = fetcher(addr, "/basic.ics", Duration::from_secs(5))
        .fetch()
        .await
        .unwrap();

    assert_eq!(body, SAMPLE);
}

#[tokio::test]
async fn test_fetch_non_success_status() {
    let addr = spawn_feed_server().await;

    let result = fetcher(addr, "/missing.ics", Duration::from_secs(5))
        .fetch()
        .await;

    match result {
        Err(Error::Fetch(message)) => assert!(message.contains("404")),
        other => panic!("Expected fetch error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_timeout() {
    let addr = spawn_feed_server().await;

    let result = fetcher(addr, "/slow.ics", Duration::from_millis(200))
        .fetch()
        .await;

    assert!(matches!(result, Err(Error::Fetch(_))));
}

#[tokio::test]
async fn test_fetch_unreachable_host() {
    // Bind then drop a listener so nothing is accepting on the port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let result = fetcher(addr, "/basic.ics", Duration::from_secs(2))
        .fetch()
        .await;

    assert!(matches!(result, Err(Error::Fetch(_))));
}

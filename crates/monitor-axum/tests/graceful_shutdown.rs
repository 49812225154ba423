//! Server lifecycle tests over a real TCP listener.

mod common;

use std::net::SocketAddr;

use monitor_axum::bootstrap::serve;
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio_util::sync::CancellationToken;

use common::{parse_records, test_config, test_context};

/// Minimal HTTP/1.1 exchange; returns the raw response.
async fn http(addr: SocketAddr, method: &str, path: &str, body: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    let request = format!(
        "{method} {path} HTTP/1.1\r\nHost: localhost\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();
    response
}

#[tokio::test]
async fn shutdown_closes_store_after_serving() {
    let dir = TempDir::new().unwrap();
    let config = test_config(&dir);
    let ctx = test_context(&config).await;
    let logs = std::sync::Arc::clone(&ctx.logs);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let token = CancellationToken::new();
    let server = tokio::spawn(serve(listener, ctx, token.clone()));

    let response = http(addr, "PUT", "/log/42", r#"{"message":"disk full"}"#).await;
    assert!(response.starts_with("HTTP/1.1 200"), "{response}");

    let response = http(addr, "GET", "/logs", "").await;
    assert!(response.starts_with("HTTP/1.1 200"), "{response}");
    assert!(response.contains(r#""raw":"disk full""#), "{response}");

    token.cancel();
    server.await.unwrap().unwrap();

    // New connections are refused once the listener is gone.
    assert!(TcpStream::connect(addr).await.is_err());

    // The store was closed as the last shutdown step.
    assert!(logs.ingest("42", b"message: late").await.is_err());

    let records = parse_records(&std::fs::read(&config.settings.log_file).unwrap());
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, "42");
}

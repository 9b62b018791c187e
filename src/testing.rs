// src/testing.rs
// =============================================================================
// A tiny HTTP server for exercising the fetchers end-to-end in tests.
//
// How it works:
// 1. Bind a TcpListener on 127.0.0.1 with an OS-assigned port
// 2. For every connection, read the request line and match its path
//    against a list of (prefix, status, body) routes
// 3. Write a canned JSON response and close the connection
//
// The response carries `Connection: close` so the client opens a fresh
// connection per request instead of reusing a pooled one; otherwise the
// second request of a fan-out would land on a socket this server has
// already answered and closed.
//
// Routes are matched in order by prefix, so the more specific paths go
// first ("/users/42/answers" before "/users/42").
// =============================================================================

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use url::Url;

/// Starts a mock API server and returns its base URL.
///
/// Each test gets its own listener on its own port, so tests never share
/// state. The acceptor task ends with the test runtime.
pub(crate) async fn mock_api(routes: Vec<(&str, u16, serde_json::Value)>) -> Url {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock API listener");
    let addr = listener.local_addr().expect("mock API listener address");

    let routes: Vec<(String, u16, String)> = routes
        .into_iter()
        .map(|(prefix, status, body)| (prefix.to_string(), status, body.to_string()))
        .collect();

    tokio::spawn(async move {
        while let Ok((mut stream, _)) = listener.accept().await {
            let routes = routes.clone();
            tokio::spawn(async move {
                let mut buf = vec![0u8; 4096];
                let n = stream.read(&mut buf).await.unwrap_or(0);
                let request = String::from_utf8_lossy(&buf[..n]).into_owned();
                let path = request.split_whitespace().nth(1).unwrap_or("/").to_string();

                let (status, body) = routes
                    .iter()
                    .find(|(prefix, _, _)| path.starts_with(prefix.as_str()))
                    .map(|(_, status, body)| (*status, body.clone()))
                    .unwrap_or((404, r#"{"error":"no route"}"#.to_string()));

                let reason = match status {
                    200 => "OK",
                    404 => "Not Found",
                    500 => "Internal Server Error",
                    _ => "Error",
                };
                let response = format!(
                    "HTTP/1.1 {status} {reason}\r\n\
                     Content-Type: application/json\r\n\
                     Content-Length: {}\r\n\
                     Connection: close\r\n\
                     \r\n\
                     {body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            });
        }
    });

    Url::parse(&format!("http://{addr}")).expect("mock API base URL")
}

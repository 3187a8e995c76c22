//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// Start a mock gateway backend that answers every request with `status`
/// and a plain-text reason body.
///
/// Returns the bound address and a log of the requests it saw.
pub async fn start_status_backend(status: u16) -> (SocketAddr, Arc<RequestLog>) {
    start_backend(status, None).await
}

/// Start a mock gateway backend that answers every request with `status`
/// and the JSON `body`.
pub async fn start_json_backend(status: u16, body: &'static str) -> (SocketAddr, Arc<RequestLog>) {
    start_backend(status, Some(body)).await
}

async fn start_backend(status: u16, json: Option<&'static str>) -> (SocketAddr, Arc<RequestLog>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let log = Arc::new(RequestLog::default());
    let seen = log.clone();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let seen = seen.clone();
                    tokio::spawn(async move {
                        let (line, body) = read_request(&mut socket).await;
                        seen.record(line, body);

                        let response = match (status, json) {
                            (204, _) => {
                                "HTTP/1.1 204 No Content\r\nConnection: close\r\n\r\n".to_string()
                            }
                            (_, Some(body)) => format!(
                                "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                                status,
                                status_text(status),
                                body.len(),
                                body
                            ),
                            (_, None) => {
                                let body = status_text(status);
                                format!(
                                    "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                                    status,
                                    body,
                                    body.len(),
                                    body
                                )
                            }
                        };
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                        tokio::time::sleep(Duration::from_millis(10)).await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    (addr, log)
}

/// Read one request: its first line and its body.
async fn read_request(socket: &mut TcpStream) -> (String, String) {
    let mut raw = Vec::new();
    let mut buf = [0u8; 4096];

    loop {
        let n = socket.read(&mut buf).await.unwrap_or(0);
        if n == 0 {
            break;
        }
        raw.extend_from_slice(&buf[..n]);

        let text = String::from_utf8_lossy(&raw);
        if let Some(end) = text.find("\r\n\r\n") {
            let length = text[..end]
                .lines()
                .find_map(|h| {
                    let (name, value) = h.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            if raw.len() >= end + 4 + length {
                break;
            }
        }
    }

    let text = String::from_utf8_lossy(&raw);
    let line = text.lines().next().unwrap_or_default().to_string();
    let body = text
        .split_once("\r\n\r\n")
        .map(|(_, body)| body.to_string())
        .unwrap_or_default();
    (line, body)
}

/// An address nothing is listening on.
pub async fn closed_port() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

fn status_text(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Unknown",
    }
}

/// Requests received by a mock backend.
#[derive(Default)]
pub struct RequestLog {
    count: AtomicU32,
    lines: Mutex<Vec<String>>,
    bodies: Mutex<Vec<String>>,
}

impl RequestLog {
    fn record(&self, line: String, body: String) {
        self.count.fetch_add(1, Ordering::SeqCst);
        self.lines.lock().unwrap().push(line);
        self.bodies.lock().unwrap().push(body);
    }

    pub fn count(&self) -> u32 {
        self.count.load(Ordering::SeqCst)
    }

    /// Request lines, e.g. `DELETE /api/devices/7 HTTP/1.1`.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    pub fn bodies(&self) -> Vec<String> {
        self.bodies.lock().unwrap().clone()
    }
}

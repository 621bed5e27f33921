//! Shared utilities for integration testing.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde_json::Value;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use api_console::display::{DisplayTarget, Notifier};

/// Start a mock backend on an ephemeral port serving fixed responses per
/// path. Unknown paths get `404 not found`. Returns the bound address.
pub async fn start_mock_backend(routes: Vec<(&'static str, u16, &'static str)>) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let routes: Arc<HashMap<&'static str, (u16, &'static str)>> = Arc::new(
        routes
            .into_iter()
            .map(|(path, status, body)| (path, (status, body)))
            .collect(),
    );

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let routes = routes.clone();
                    tokio::spawn(async move {
                        let mut buf = [0u8; 2048];
                        let n = socket.read(&mut buf).await.unwrap_or(0);
                        let request = String::from_utf8_lossy(&buf[..n]).to_string();
                        let path = request
                            .lines()
                            .next()
                            .and_then(|line| line.split_whitespace().nth(1))
                            .unwrap_or("/")
                            .to_string();

                        let (status, body) = routes
                            .get(path.as_str())
                            .copied()
                            .unwrap_or((404, "not found"));
                        let response = format!(
                            "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status,
                            status_text(status),
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// Start a backend that accepts connections but never responds, to exercise
/// the per-request deadline.
#[allow(dead_code)]
pub async fn start_hanging_backend() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((socket, _)) => {
                    tokio::spawn(async move {
                        tokio::time::sleep(Duration::from_secs(30)).await;
                        drop(socket);
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

fn status_text(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        _ => "OK",
    }
}

/// One rendered state of a display target.
#[derive(Debug, Clone, PartialEq)]
#[allow(dead_code)]
pub enum DisplayState {
    Loading,
    Success(Value),
    Error(String),
}

/// Display target recording every state transition.
#[derive(Default)]
#[allow(dead_code)]
pub struct RecordingTarget {
    pub states: Mutex<Vec<DisplayState>>,
}

#[allow(dead_code)]
impl RecordingTarget {
    pub fn last(&self) -> Option<DisplayState> {
        self.states.lock().unwrap().last().cloned()
    }

    pub fn all(&self) -> Vec<DisplayState> {
        self.states.lock().unwrap().clone()
    }
}

impl DisplayTarget for RecordingTarget {
    fn set_loading(&self) {
        self.states.lock().unwrap().push(DisplayState::Loading);
    }

    fn set_success(&self, body: &Value) {
        self.states
            .lock()
            .unwrap()
            .push(DisplayState::Success(body.clone()));
    }

    fn set_error(&self, message: &str) {
        self.states
            .lock()
            .unwrap()
            .push(DisplayState::Error(message.to_string()));
    }
}

/// Notifier recording every announcement.
#[derive(Default)]
#[allow(dead_code)]
pub struct RecordingNotifier {
    pub successes: Mutex<Vec<String>>,
    pub failures: Mutex<Vec<String>>,
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.successes.lock().unwrap().push(message.to_string());
    }

    fn failure(&self, title: &str, message: &str) {
        self.failures
            .lock()
            .unwrap()
            .push(format!("{}: {}", title, message));
    }
}

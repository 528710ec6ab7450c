//! Shared utilities for integration testing.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use employee_api::config::AppConfig;
use employee_api::http::HttpServer;
use employee_api::lifecycle::Shutdown;
use employee_api::model::{Employee, ListEnvelope};

/// One captured upstream round trip.
#[derive(Debug, Clone)]
pub struct UpstreamRequest {
    pub method: String,
    pub path: String,
    pub body: String,
}

/// Start a programmable mock upstream: the closure receives each parsed
/// request and decides the (status, body) to answer.
pub async fn start_programmable_upstream<F, Fut>(addr: SocketAddr, f: F)
where
    F: Fn(UpstreamRequest) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind(addr).await.unwrap();
    let f = Arc::new(f);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    tokio::spawn(async move {
                        let request = match read_request(&mut socket).await {
                            Some(r) => r,
                            None => return,
                        };
                        let (status, body) = f(request).await;
                        let status_text = match status {
                            200 => "200 OK",
                            201 => "201 Created",
                            404 => "404 Not Found",
                            429 => "429 Too Many Requests",
                            500 => "500 Internal Server Error",
                            503 => "503 Service Unavailable",
                            _ => "200 OK",
                        };

                        let response = format!(
                            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
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
}

/// Read one HTTP/1.1 request off the socket: request line, headers, body.
async fn read_request(socket: &mut TcpStream) -> Option<UpstreamRequest> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    let header_end = loop {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = find_subsequence(&buf, b"\r\n\r\n") {
            break pos;
        }
        if buf.len() > 64 * 1024 {
            return None;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let mut lines = head.lines();
    let request_line = lines.next()?;
    let mut parts = request_line.split_whitespace();
    let method = parts.next()?.to_string();
    let path = parts.next()?.to_string();

    let content_length = lines
        .filter_map(|line| {
            let (key, value) = line.split_once(':')?;
            if key.eq_ignore_ascii_case("content-length") {
                value.trim().parse::<usize>().ok()
            } else {
                None
            }
        })
        .next()
        .unwrap_or(0);

    let body_start = header_end + 4;
    while buf.len() < body_start + content_length {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    let body_end = (body_start + content_length).min(buf.len());
    let body = String::from_utf8_lossy(&buf[body_start..body_end]).to_string();

    Some(UpstreamRequest { method, path, body })
}

fn find_subsequence(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Facade config pointed at a local mock upstream, with retries shrunk to
/// test speed.
pub fn facade_config(bind: SocketAddr, upstream: SocketAddr) -> AppConfig {
    let mut config = AppConfig::default();
    config.listener.bind_address = bind.to_string();
    config.upstream.base_url = format!("http://{}/api/v1/employee", upstream);
    config.retries.delay_ms = 10;
    config
}

/// Boot the facade server on its configured address. The returned handle
/// shuts it down when triggered.
pub async fn start_facade(config: AppConfig) -> Shutdown {
    let addr: SocketAddr = config.listener.bind_address.parse().unwrap();
    let listener = TcpListener::bind(addr).await.unwrap();

    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    let server = HttpServer::new(config).unwrap();

    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    tokio::time::sleep(std::time::Duration::from_millis(200)).await;
    shutdown
}

#[allow(dead_code)]
pub fn employee(id: &str, name: &str, salary: i64) -> Employee {
    Employee {
        id: id.to_string(),
        name: name.to_string(),
        salary,
        age: 30,
        title: "Engineer".to_string(),
        email: format!("{}@company.com", id),
    }
}

#[allow(dead_code)]
pub fn list_body(employees: Vec<Employee>) -> String {
    serde_json::to_string(&ListEnvelope {
        data: employees,
        status: "Successfully processed request.".to_string(),
    })
    .unwrap()
}

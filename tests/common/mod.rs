#![allow(dead_code)]

use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// A canned reply served by [`StubServer`].
pub enum Reply {
    Json(u16, String),
    /// Accept the connection and never answer.
    Hang(Duration),
}

/// Minimal HTTP/1.1 server on an ephemeral port. It answers one connection
/// per reply, in order, then stops listening.
pub struct StubServer {
    base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
    handle: Option<JoinHandle<()>>,
}

impl StubServer {
    pub fn start(replies: Vec<Reply>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind stub server");
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let requests = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&requests);

        let handle = thread::spawn(move || {
            for reply in replies {
                let Ok((mut stream, _)) = listener.accept() else {
                    return;
                };
                let request_line = read_request(&mut stream);
                seen.lock().unwrap().push(request_line);

                match reply {
                    Reply::Json(status, body) => {
                        let response = format!(
                            "HTTP/1.1 {status} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                            reason(status),
                            body.len()
                        );
                        let _ = stream.write_all(response.as_bytes());
                    }
                    Reply::Hang(duration) => thread::sleep(duration),
                }
            }
        });

        Self {
            base_url,
            requests,
            handle: Some(handle),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request lines (`GET /path?query HTTP/1.1`) received so far.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// Waits until every reply has been served.
    pub fn finish(mut self) -> Vec<String> {
        if let Some(handle) = self.handle.take() {
            handle.join().expect("Stub server panicked");
        }
        self.requests()
    }
}

fn read_request(stream: &mut TcpStream) -> String {
    let mut reader = BufReader::new(stream);
    let mut request_line = String::new();
    let _ = reader.read_line(&mut request_line);

    loop {
        let mut header = String::new();
        match reader.read_line(&mut header) {
            Ok(0) | Err(_) => break,
            Ok(_) if header == "\r\n" => break,
            Ok(_) => {}
        }
    }

    request_line.trim_end().to_owned()
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        _ => "Error",
    }
}

/// A `commentThreads` page with `count` items numbered from `first`.
pub fn comment_page(first: usize, count: usize, next_page_token: Option<&str>) -> String {
    let items: Vec<serde_json::Value> = (first..first + count)
        .map(|n| {
            let text = if n % 2 == 0 {
                format!("Comment {n}: this song is amazing")
            } else {
                format!("Comment {n}: first time hearing it")
            };
            serde_json::json!({
                "kind": "youtube#commentThread",
                "snippet": {
                    "videoId": "dQw4w9WgXcQ",
                    "topLevelComment": {
                        "snippet": {
                            "textDisplay": text,
                            "authorDisplayName": format!("@viewer{n}"),
                            "likeCount": n,
                            "publishedAt": "2024-05-01T10:00:00Z"
                        }
                    }
                }
            })
        })
        .collect();

    let mut page = serde_json::json!({
        "kind": "youtube#commentThreadListResponse",
        "items": items,
    });
    if let Some(token) = next_page_token {
        page["nextPageToken"] = serde_json::Value::from(token);
    }
    page.to_string()
}

pub fn forbidden_body() -> String {
    serde_json::json!({
        "error": {
            "code": 403,
            "message": "The request cannot be completed because you have exceeded your quota.",
            "errors": [{ "reason": "quotaExceeded", "domain": "youtube.quota" }]
        }
    })
    .to_string()
}

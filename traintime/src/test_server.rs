//! Single-request HTTP responder for client tests.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

/// Answers exactly one request on a local port with a canned response.
pub struct OneShotServer {
    /// Base URL to point a client at.
    pub url: String,
    handle: JoinHandle<String>,
}

impl OneShotServer {
    /// Start serving `body` with the given status line, e.g. "503 Service Unavailable".
    pub fn start(status: &str, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {status}\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut head = Vec::new();
            let mut buf = [0u8; 1024];
            while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                head.extend_from_slice(&buf[..n]);
            }
            stream.write_all(response.as_bytes()).unwrap();
            String::from_utf8_lossy(&head).into_owned()
        });

        Self {
            url: format!("http://{addr}/"),
            handle,
        }
    }

    /// The request head the server received.
    pub fn request(self) -> String {
        self.handle.join().unwrap()
    }
}

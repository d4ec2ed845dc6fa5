//! Shared fixtures for the catalog SDK integration tests.
//!
//! Provides a scripted [`StubTransport`], canned search payloads, a
//! [`RecordingSurface`] and a one-shot loopback HTTP server for exercising
//! the real `reqwest` transport.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

use ball_catalog_sdk::view::{PageControl, ResultsView};
use ball_catalog_sdk::{
    CatalogClient, CatalogError, ClientConfig, HttpResponse, Result, Surface, Transport,
};
use reqwest::Url;

// ---------------------------------------------------------------------------
// StubTransport
// ---------------------------------------------------------------------------

pub enum Reply {
    Respond(HttpResponse),
    Fail,
}

/// Transport that replays scripted replies and records every requested URL.
///
/// Once the script is exhausted it answers with an empty result page.
#[derive(Default)]
pub struct StubTransport {
    replies: RefCell<VecDeque<Reply>>,
    pub requests: RefCell<Vec<Url>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: u16, body: impl Into<String>) -> Self {
        self.replies
            .borrow_mut()
            .push_back(Reply::Respond(HttpResponse::new(status, body)));
        self
    }

    pub fn fail(self) -> Self {
        self.replies.borrow_mut().push_back(Reply::Fail);
        self
    }

    /// Path and query of every request, e.g. `/api/search?page=1&per_page=20`.
    pub fn requested(&self) -> Vec<String> {
        self.requests
            .borrow()
            .iter()
            .map(|u| match u.query() {
                Some(q) => format!("{}?{}", u.path(), q),
                None => u.path().to_string(),
            })
            .collect()
    }
}

impl Transport for StubTransport {
    fn get(&self, url: &Url) -> Result<HttpResponse> {
        self.requests.borrow_mut().push(url.clone());
        match self.replies.borrow_mut().pop_front() {
            Some(Reply::Respond(resp)) => Ok(resp),
            Some(Reply::Fail) => Err(connection_error()),
            None => Ok(HttpResponse::new(200, empty_page_json())),
        }
    }
}

/// A transport-level `reqwest` failure, produced without touching the network.
pub fn connection_error() -> CatalogError {
    let err = reqwest::blocking::Client::new()
        .get("http://")
        .build()
        .unwrap_err();
    CatalogError::Http(err)
}

pub fn stub_client(transport: StubTransport) -> CatalogClient<StubTransport> {
    CatalogClient::with_transport(ClientConfig::default(), transport).unwrap()
}

// ---------------------------------------------------------------------------
// Payloads
// ---------------------------------------------------------------------------

pub fn empty_page_json() -> String {
    serde_json::json!({
        "results": [],
        "total": 0,
        "page": 1,
        "per_page": 20,
        "pages": 0
    })
    .to_string()
}

pub fn sample_ball(record_no: i64) -> serde_json::Value {
    serde_json::json!({
        "record_no": record_no,
        "ball_name": format!("Ball {}", record_no),
        "ball_name_format": null,
        "era": "1970s",
        "era_start": 1970,
        "cover_pattern": "Swirl",
        "manufacturer": "Brunswick",
        "value_mid": 125.0,
        "currency": "USD",
        "country": "USA",
        "rarity_score": 4
    })
}

/// A page of `count` sample balls out of `total`, `pages` pages overall.
pub fn page_json(count: i64, total: u64, pages: u32) -> String {
    let results: Vec<serde_json::Value> = (1..=count).map(sample_ball).collect();
    serde_json::json!({
        "results": results,
        "total": total,
        "page": 1,
        "per_page": 20,
        "pages": pages
    })
    .to_string()
}

pub fn sparse_ball_json() -> serde_json::Value {
    serde_json::json!({
        "record_no": 77,
        "ball_name": "Mystery <Ball> & Co",
        "era": null,
        "cover_pattern": null,
        "manufacturer": null,
        "value_mid": null,
        "country": null,
        "rarity_score": null
    })
}

// ---------------------------------------------------------------------------
// RecordingSurface
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Loading,
    Results { cards: usize, controls: usize },
    Error(String),
    Navigate(String),
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub events: Vec<Event>,
    pub last_results: Option<ResultsView>,
    pub last_pagination: Vec<PageControl>,
}

impl Surface for RecordingSurface {
    fn show_loading(&mut self) {
        self.events.push(Event::Loading);
    }

    fn show_results(&mut self, results: &ResultsView, pagination: &[PageControl]) {
        self.events.push(Event::Results {
            cards: results.cards.len(),
            controls: pagination.len(),
        });
        self.last_results = Some(results.clone());
        self.last_pagination = pagination.to_vec();
    }

    fn show_error(&mut self, message: &str) {
        self.events.push(Event::Error(message.to_string()));
    }

    fn navigate(&mut self, path: &str) {
        self.events.push(Event::Navigate(path.to_string()));
    }
}

// ---------------------------------------------------------------------------
// Loopback server
// ---------------------------------------------------------------------------

/// Serve `responses` (status, body) to successive connections on a loopback
/// port. The handle yields the request line of each connection.
pub fn serve(responses: Vec<(u16, String)>) -> (String, JoinHandle<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let handle = thread::spawn(move || {
        let mut request_lines = Vec::new();
        for (status, body) in responses {
            let (mut stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());

            let mut request_line = String::new();
            reader.read_line(&mut request_line).unwrap();
            request_lines.push(request_line.trim_end().to_string());

            loop {
                let mut header = String::new();
                let n = reader.read_line(&mut header).unwrap();
                if n == 0 || header == "\r\n" {
                    break;
                }
            }

            let reason = match status {
                200 => "OK",
                404 => "Not Found",
                _ => "Error",
            };
            let response = format!(
                "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                reason,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();
        }
        request_lines
    });

    (base_url, handle)
}

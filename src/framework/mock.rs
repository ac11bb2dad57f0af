//! Test doubles for the transport and navigation seams.
//!
//! # Testing Strategy
//! In unit and integration tests we do not want a live backend just to
//! exercise the client logic. Instead we queue *expectations* on a
//! [`MockTransport`]: each expectation names the request we expect next
//! (method + path) and the response to play back. A mismatch or a leftover
//! expectation is a test failure.
//!
//! ```ignore
//! let transport = Arc::new(MockTransport::new());
//! transport
//!     .expect(Method::Get, "api/coffees/123")
//!     .return_json(json!({ "id": 123 }));
//!
//! // drive the code under test ...
//! transport.verify(); // ensures every expectation was consumed
//! ```
//!
//! [`RecordingNavigator`] plays the same role for the navigation seam: it
//! records every navigation event so tests can assert on redirects and
//! back-navigation without a real router.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::framework::transport::{Method, RestRequest, RestResponse, Transport, TransportError};
use crate::nav::Navigator;

struct Expectation {
    method: Method,
    path: String,
    response: Result<RestResponse, TransportError>,
}

/// A scripted transport with expectation tracking.
#[derive(Default)]
pub struct MockTransport {
    expectations: Mutex<VecDeque<Expectation>>,
}

impl MockTransport {
    /// Creates a new mock transport with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects the next request to be `method` on `path`.
    pub fn expect(&self, method: Method, path: impl Into<String>) -> ExpectationBuilder<'_> {
        ExpectationBuilder {
            method,
            path: path.into(),
            headers: HashMap::new(),
            expectations: &self.expectations,
        }
    }

    /// Panics if any queued expectation was never consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap();
        if !remaining.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                remaining.len()
            );
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: RestRequest) -> Result<RestResponse, TransportError> {
        let expectation = self.expectations.lock().unwrap().pop_front();
        match expectation {
            Some(exp) => {
                if exp.method != request.method || exp.path != request.path {
                    panic!(
                        "Expected {} {} but got {} {}",
                        exp.method, exp.path, request.method, request.path
                    );
                }
                exp.response
            }
            None => panic!("Unexpected request: {} {}", request.method, request.path),
        }
    }
}

/// Builder for one queued expectation. Every terminal method pushes the
/// expectation and returns, so expectations read as single statements.
pub struct ExpectationBuilder<'a> {
    method: Method,
    path: String,
    headers: HashMap<String, String>,
    expectations: &'a Mutex<VecDeque<Expectation>>,
}

impl ExpectationBuilder<'_> {
    /// Attaches a response header (e.g. pagination metadata).
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Responds 200 with the given JSON body.
    pub fn return_json(self, body: Value) {
        self.push(200, Some(body));
    }

    /// Responds with the given status and JSON body.
    pub fn return_json_status(self, status: u16, body: Value) {
        self.push(status, Some(body));
    }

    /// Responds with the given status and an empty body.
    pub fn return_status(self, status: u16) {
        self.push(status, None);
    }

    /// Fails the request below the status level.
    pub fn return_err(self, error: TransportError) {
        let mut queue = self.expectations.lock().unwrap();
        queue.push_back(Expectation {
            method: self.method,
            path: self.path,
            response: Err(error),
        });
    }

    fn push(self, status: u16, body: Option<Value>) {
        let mut queue = self.expectations.lock().unwrap();
        queue.push_back(Expectation {
            method: self.method,
            path: self.path,
            response: Ok(RestResponse {
                status,
                headers: self.headers,
                body,
            }),
        });
    }
}

/// A navigation event observed by [`RecordingNavigator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    Back,
    NotFound,
}

/// A [`Navigator`] that records every call for later assertion.
#[derive(Default)]
pub struct RecordingNavigator {
    events: Mutex<Vec<NavEvent>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// All events observed so far, in order.
    pub fn events(&self) -> Vec<NavEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn back(&self) {
        self.events.lock().unwrap().push(NavEvent::Back);
    }

    fn go_to_not_found(&self) {
        self.events.lock().unwrap().push(NavEvent::NotFound);
    }
}

//! The HTTP transport seam.
//!
//! # Architecture Note
//! The service layer never talks to reqwest directly. It builds a
//! [`RestRequest`] and hands it to a [`Transport`] implementation. This seam
//! is what makes the whole engine testable: tests swap in
//! [`MockTransport`](crate::framework::mock::MockTransport) and assert on the
//! exact requests, while production wires [`HttpTransport`].
//!
//! The transport is deliberately dumb: one request in, one response out. No
//! retries, no caching, no request coalescing, no timeouts. Those are the
//! concerns of the backing HTTP client or the embedding application.

use std::collections::HashMap;
use std::fmt;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// The HTTP methods the engine issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        };
        f.write_str(s)
    }
}

/// A single request to the backend, relative to the configured base URL.
#[derive(Debug, Clone)]
pub struct RestRequest {
    pub method: Method,
    /// Path relative to the base URL, e.g. `api/coffees/42`.
    pub path: String,
    /// JSON body, if the operation carries one.
    pub body: Option<Value>,
}

impl RestRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// A response from the backend. Non-2xx statuses are returned here, not as
/// errors; interpreting status codes is the service layer's job.
#[derive(Debug, Clone)]
pub struct RestResponse {
    pub status: u16,
    pub headers: HashMap<String, String>,
    /// Parsed JSON body. `None` when the backend sent an empty body.
    pub body: Option<Value>,
}

impl RestResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Errors raised below the status-code level: connection failures, malformed
/// response bodies.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TransportError {
    /// The request never produced a response (DNS, connect, TLS, I/O).
    #[error("network error: {0}")]
    Network(String),

    /// The response body was present but not valid JSON.
    #[error("malformed response body: {0}")]
    MalformedBody(String),
}

/// One network round trip. Each service operation issues exactly one `send`.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: RestRequest) -> Result<RestResponse, TransportError>;
}

/// The production transport, backed by a shared [`reqwest::Client`].
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// `base_url` is the backend origin, e.g. `http://localhost:8080`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: RestRequest) -> Result<RestResponse, TransportError> {
        let url = self.url_for(&request.path);
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        };

        debug!(%method, %url, "Sending request");

        let mut builder = self.client.request(method, &url);
        if let Some(body) = request.body {
            builder = builder.json(&body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();

        let text = response
            .text()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        let body = if text.is_empty() {
            None
        } else {
            Some(
                serde_json::from_str(&text)
                    .map_err(|e| TransportError::MalformedBody(e.to_string()))?,
            )
        };

        debug!(status, has_body = body.is_some(), "Received response");

        Ok(RestResponse {
            status,
            headers,
            body,
        })
    }
}

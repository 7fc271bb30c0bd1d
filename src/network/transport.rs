//! Transport abstraction used by the resolver

use async_trait::async_trait;
use std::collections::HashMap;

/// HTTP response as seen by the resolver
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: HashMap<String, String>,
    /// Response body as text
    pub text: String,
    /// Response URL (after redirects)
    pub url: String,
}

impl HttpResponse {
    /// A 200 response carrying `text`, mostly useful for tests
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            status: 200,
            headers: HashMap::new(),
            text: text.into(),
            url: String::new(),
        }
    }

    /// Check if response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parse the body as a JSON object.
    ///
    /// Returns `None` for anything else, including valid JSON that is
    /// not an object (a bare string, number or array).
    pub fn json_object(&self) -> Option<serde_json::Map<String, serde_json::Value>> {
        match serde_json::from_str(&self.text) {
            Ok(serde_json::Value::Object(map)) => Some(map),
            _ => None,
        }
    }

    /// Content type header, if any
    pub fn content_type(&self) -> Option<&str> {
        self.headers.get("content-type").map(String::as_str)
    }
}

/// Anything able to perform a GET request.
///
/// Proxy selection belongs to the implementation; callers only hand
/// over the URL.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform a GET request. Errors cover connection failures,
    /// timeouts and non-success statuses.
    async fn get(&self, url: &str) -> anyhow::Result<HttpResponse>;
}

//! Inbound request shape consumed by the strategy.

use std::collections::HashMap;

use serde_json::Value;

/// Framework-agnostic view of an inbound HTTP request.
///
/// Hosts adapt their native request type into this shape; the strategy only
/// reads headers, the parsed body, and the query-string map. Header names
/// are matched case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct Request {
    headers: HashMap<String, String>,
    body: HashMap<String, Value>,
    query: HashMap<String, String>,
}

impl Request {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into().to_lowercase(), value.into());
        self
    }

    pub fn with_body_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.body.insert(name.into(), value.into());
        self
    }

    pub fn with_query_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(name.into(), value.into());
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_lowercase()).map(String::as_str)
    }

    /// Token segment of the `Authorization` header, if the header exists.
    ///
    /// The header is split on spaces and the last segment taken, which
    /// tolerates `Bearer xyz`, `Token xyz`, and bare-token conventions
    /// alike. The segment may be empty (e.g. a header ending in a space);
    /// the strategy treats that as missing credentials.
    pub(crate) fn bearer_token(&self) -> Option<&str> {
        self.header("authorization")
            .map(|value| value.rsplit_once(' ').map_or(value, |(_, token)| token))
    }

    pub(crate) fn body_str(&self, field: &str) -> Option<&str> {
        self.body.get(field).and_then(Value::as_str)
    }

    pub(crate) fn query_param(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(String::as_str)
    }
}

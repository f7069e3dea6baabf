use std::collections::HashMap;

/// Represents a parsed HTTP request from a client.
///
/// Only the request line matters to this server: headers and body are read
/// off the wire but never interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The method token, accepted as sent (any verb is served alike)
    pub method: String,
    /// The path component of the request target, without the query string
    pub path: String,
    /// HTTP version token (typically "HTTP/1.1")
    pub version: String,
    /// Decoded query parameters; the last occurrence of a key wins
    pub query: HashMap<String, String>,
}

/// Builder for constructing Request objects.
pub struct RequestBuilder {
    method: Option<String>,
    path: Option<String>,
    version: Option<String>,
    query: HashMap<String, String>,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            method: None,
            path: None,
            version: None,
            query: HashMap::new(),
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> Result<Request, &'static str> {
        Ok(Request {
            method: self.method.unwrap_or_else(|| "GET".to_string()),
            path: self.path.ok_or("path missing")?,
            version: self.version.unwrap_or_else(|| "HTTP/1.1".to_string()),
            query: self.query,
        })
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Request {
    /// Retrieves a query parameter by name.
    ///
    /// # Returns
    ///
    /// `Some(&str)` with the decoded value if present, `None` otherwise.
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(|v| v.as_str())
    }

    /// Retrieves a query parameter, falling back to `default` when absent.
    pub fn query_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.query_param(key).unwrap_or(default)
    }
}

use std::net::SocketAddr;

use bytes::Bytes;

use crate::http::mime::content_type_for;

/// HTTP status codes produced by the server.
///
/// - `Ok` (200): a static file is served
/// - `TemporaryRedirect` (307): an event lookup was resolved
/// - `NotFound` (404): no route or no such file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 307 Temporary Redirect
    TemporaryRedirect,
    /// 404 Not Found
    NotFound,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use crisis_site::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::TemporaryRedirect.as_u16(), 307);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::TemporaryRedirect => 307,
            StatusCode::NotFound => 404,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::TemporaryRedirect => "Temporary Redirect",
            StatusCode::NotFound => "Not Found",
        }
    }
}

/// Represents a complete HTTP response ready to be sent to a client.
///
/// Headers keep their insertion order, which is the order they go on the wire.
#[derive(Debug, Clone)]
pub struct Response {
    /// The HTTP status code
    pub status: StatusCode,
    /// HTTP headers as ordered name/value pairs
    pub headers: Vec<(String, String)>,
    /// Response body as bytes
    pub body: Bytes,
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// Unlike many builders this one adds no headers on its own: every header on
/// the wire is one the caller asked for.
///
/// # Example
///
/// ```
/// # use bytes::Bytes;
/// # use crisis_site::http::response::{ResponseBuilder, StatusCode};
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .header("Content-Type", "text/css")
///     .body(Bytes::from_static(b"body {}"))
///     .build();
/// assert_eq!(response.header("Content-Type"), Some("text/css"));
/// assert_eq!(response.headers.len(), 1);
/// ```
pub struct ResponseBuilder {
    status: StatusCode,
    headers: Vec<(String, String)>,
    body: Bytes,
}

impl ResponseBuilder {
    /// Creates a new response builder with the specified status code.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: Bytes::new(),
        }
    }

    /// Adds a header, replacing an earlier one with the same name
    /// (compared case-insensitively) in place.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        match self.headers.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(&key)) {
            Some(existing) => existing.1 = value,
            None => self.headers.push((key, value)),
        }
        self
    }

    /// Sets the response body.
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Adds a `Content-Length` header matching the current body.
    pub fn content_length(self) -> Self {
        let len = self.body.len();
        self.header("Content-Length", len.to_string())
    }

    pub fn build(self) -> Response {
        Response {
            status: self.status,
            headers: self.headers,
            body: self.body,
        }
    }
}

impl Response {
    /// A 200 response carrying the bytes of the file at `path`.
    ///
    /// The content type is inferred from `path`; the body is sent unmodified.
    pub fn file(path: &str, body: impl Into<Bytes>) -> Self {
        ResponseBuilder::new(StatusCode::Ok)
            .header("Content-Type", content_type_for(path))
            .body(body)
            .content_length()
            .header("Connection", "close")
            .build()
    }

    /// A 307 response pointing at `location`. It has no body and no other headers.
    pub fn redirect(location: impl Into<String>) -> Self {
        ResponseBuilder::new(StatusCode::TemporaryRedirect)
            .header("Location", location)
            .build()
    }

    /// A 404 page that names the requesting client's address.
    pub fn not_found(peer: SocketAddr) -> Self {
        ResponseBuilder::new(StatusCode::NotFound)
            .header("Content-Type", "text/html")
            .body(not_found_page(peer))
            .content_length()
            .header("Connection", "close")
            .build()
    }

    /// Looks up a header value by name, ignoring case.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}

fn not_found_page(peer: SocketAddr) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head><title>Error 404</title></head>\n\
         <body>\n\
         <p style=\"color: red;\">The file is not found</p>\n\
         <p>Client IP: {}</p>\n\
         <p>Client Port: {}</p>\n\
         </body>\n\
         </html>",
        peer.ip(),
        peer.port()
    )
}

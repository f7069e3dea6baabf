use std::collections::HashMap;
use std::fmt;

use url::form_urlencoded;

use crate::http::request::Request;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Nothing but whitespace arrived before the stream ended.
    Empty,
    /// The request line is not `<method> <target> <version>`.
    Malformed(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => f.write_str("empty request"),
            ParseError::Malformed(line) => write!(f, "malformed request line {:?}", line),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parses the request line of a raw request.
///
/// `buf` holds everything read up to the header terminator (or the end of
/// the stream). Invalid UTF-8 is replaced rather than rejected.
pub fn parse_http_request(buf: &[u8]) -> Result<Request, ParseError> {
    let text = String::from_utf8_lossy(buf);
    let request_line = text
        .trim()
        .split(['\r', '\n'])
        .next()
        .filter(|line| !line.is_empty())
        .ok_or(ParseError::Empty)?;

    let parts: Vec<&str> = request_line.split_whitespace().collect();
    let [method, target, version] = parts.as_slice() else {
        return Err(ParseError::Malformed(request_line.to_string()));
    };

    let (path, query) = split_target(target);

    Ok(Request {
        method: method.to_string(),
        path: path.to_string(),
        version: version.to_string(),
        query: parse_query(query),
    })
}

/// Splits a request target into path and query string, dropping any fragment.
pub fn split_target(target: &str) -> (&str, &str) {
    let target = target.split_once('#').map_or(target, |(t, _)| t);
    target.split_once('?').unwrap_or((target, ""))
}

/// Decodes a query string. Repeated keys keep their last value; blank
/// values are dropped, so a blank parameter counts as absent.
pub fn parse_query(query: &str) -> HashMap<String, String> {
    form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .filter(|(_, value)| !value.is_empty())
        .collect()
}

pub fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4)
        .position(|w| w == b"\r\n\r\n")
}

//! HTTP protocol implementation.
//!
//! This module implements a minimal HTTP/1.1 server that answers exactly one
//! request per connection.
//!
//! # Architecture
//!
//! - **`connection`**: The per-connection state machine
//! - **`parser`**: Parses the request line and query string from raw bytes
//! - **`request`**: HTTP request representation
//! - **`router`**: Maps a request to a static file, a redirect or a 404
//! - **`response`**: HTTP response representation with builder pattern
//! - **`writer`**: Serializes and writes HTTP responses to the client
//! - **`mime`**: MIME type detection based on file extensions
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Wait for the header terminator or EOF
//!        └──────┬──────┘
//!               │ Request line parsed      (empty or malformed → Closed)
//!               ▼
//!        ┌──────────────────┐
//!        │     Parsed       │ ← Route, resolve events, read files
//!        └──────┬───────────┘
//!               │ Response ready           (I/O failure → Closed)
//!               ▼
//!        ┌──────────────────┐
//!        │   Responding     │ ← Send 200, 307 or 404
//!        └──────┬───────────┘
//!               ▼
//!            Closed
//! ```

pub mod request;
pub mod response;
pub mod parser;
pub mod connection;
pub mod writer;
pub mod mime;
pub mod router;

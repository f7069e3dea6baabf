//! Crisis site - a small bilingual static site server
//!
//! Serves English and Arabic pages, stylesheets, images and videos, and
//! redirects `/event` lookups to local content or an external search.

pub mod config;
pub mod event;
pub mod http;
pub mod server;

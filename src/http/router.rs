//! Request routing.
//!
//! Routing happens in two steps. [`classify`] sorts a path into a
//! [`PathClass`] using a fixed, first-match-wins table; [`Router::route`]
//! then turns the class into a [`RouteOutcome`], consulting the filesystem
//! for static files and the event resolver for `/event` lookups.

use std::io;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::Context;
use percent_encoding::percent_decode_str;
use tokio::fs;
use tracing::info;

use crate::config::Config;
use crate::event::{ContentType, EventQuery, EventResolver};
use crate::http::request::Request;
use crate::http::response::Response;

pub const ENGLISH_HOME: &str = "html/main_en.html";
pub const ARABIC_HOME: &str = "html/main_ar.html";

const ENGLISH_HOME_ALIASES: &[&str] = &["/", "/index.html", "/main_en.html", "/en"];
const ARABIC_HOME_ALIASES: &[&str] = &["/ar", "/main_ar.html"];
const EVENT_PREFIX: &str = "/event";
const ASSET_PREFIXES: &[&str] = &["/html/", "/css/", "/imgs/", "/videos/"];

/// What a request path refers to, before looking at the filesystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathClass<'a> {
    EnglishHome,
    ArabicHome,
    Event,
    /// A file under one of the asset folders, relative to the site root.
    Asset(&'a str),
    Unknown,
}

/// The decision taken for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    /// Serve the file at this path, relative to the site root.
    StaticFile(String),
    /// Redirect to this URL.
    Redirect(String),
    NotFound,
}

/// Classifies a request path. Rules are checked in order; the first match wins.
pub fn classify(path: &str) -> PathClass<'_> {
    if ENGLISH_HOME_ALIASES.contains(&path) {
        PathClass::EnglishHome
    } else if ARABIC_HOME_ALIASES.contains(&path) {
        PathClass::ArabicHome
    } else if path.starts_with(EVENT_PREFIX) {
        PathClass::Event
    } else if ASSET_PREFIXES.iter().any(|prefix| path.starts_with(prefix)) {
        // refuse anything that could step outside the site root
        if path.split('/').any(|segment| segment == "..") {
            PathClass::Unknown
        } else {
            PathClass::Asset(&path[1..])
        }
    } else {
        PathClass::Unknown
    }
}

/// Builds the event query from `keyword` (default empty) and `type`
/// (default `text`) parameters.
pub fn event_query(req: &Request) -> EventQuery {
    EventQuery::new(
        req.query_or("keyword", ""),
        ContentType::from_param(req.query_or("type", "text")),
    )
}

/// Returns whether `path` names an existing regular file.
pub async fn is_file(path: &Path) -> bool {
    fs::metadata(path)
        .await
        .map(|meta| meta.is_file())
        .unwrap_or(false)
}

pub struct Router {
    root: PathBuf,
    events: EventResolver,
}

impl Router {
    pub fn new(root: impl Into<PathBuf>, origin: url::Url) -> Self {
        let root = root.into();
        Self {
            events: EventResolver::new(root.clone(), origin),
            root,
        }
    }

    pub fn from_config(cfg: &Config) -> anyhow::Result<Self> {
        Ok(Self::new(cfg.root.clone(), cfg.origin_url()?))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Routes a request.
    ///
    /// The path is percent-decoded before it is classified, so file names
    /// in same-origin redirects resolve to the file they were built from.
    /// A `StaticFile` outcome always names an existing file; missing files
    /// come back as `NotFound`.
    pub async fn route(&self, req: &Request) -> anyhow::Result<RouteOutcome> {
        let decoded = percent_decode_str(&req.path).decode_utf8_lossy();
        let path = match classify(&decoded) {
            PathClass::EnglishHome => ENGLISH_HOME,
            PathClass::ArabicHome => ARABIC_HOME,
            PathClass::Event => return self.events.resolve(&event_query(req)).await,
            PathClass::Asset(path) => path,
            PathClass::Unknown => return Ok(RouteOutcome::NotFound),
        };

        if is_file(&self.root.join(path)).await {
            Ok(RouteOutcome::StaticFile(path.to_string()))
        } else {
            Ok(RouteOutcome::NotFound)
        }
    }

    /// Routes a request and builds the response for it.
    pub async fn handle(&self, req: &Request, peer: SocketAddr) -> anyhow::Result<Response> {
        let outcome = self.route(req).await?;
        self.respond(outcome, peer).await
    }

    /// Builds the response for an outcome, reading the file if there is one.
    pub async fn respond(&self, outcome: RouteOutcome, peer: SocketAddr) -> anyhow::Result<Response> {
        match outcome {
            RouteOutcome::StaticFile(path) => {
                match fs::read(self.root.join(&path)).await {
                    Ok(content) => {
                        let response = Response::file(&path, content);
                        info!(
                            %peer,
                            file = %path,
                            content_type = response.header("Content-Type").unwrap_or_default(),
                            bytes = response.body.len(),
                            "200 OK"
                        );
                        Ok(response)
                    }
                    // removed since it was checked
                    Err(err) if err.kind() == io::ErrorKind::NotFound => {
                        info!(%peer, file = %path, "404 Not Found");
                        Ok(Response::not_found(peer))
                    }
                    Err(err) => Err(err).with_context(|| format!("reading {}", path)),
                }
            }
            RouteOutcome::Redirect(location) => {
                info!(%peer, %location, "307 Temporary Redirect");
                Ok(Response::redirect(location))
            }
            RouteOutcome::NotFound => {
                info!(%peer, "404 Not Found");
                Ok(Response::not_found(peer))
            }
        }
    }
}

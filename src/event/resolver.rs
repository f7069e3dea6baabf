//! Decides where an event lookup redirects to.

use std::path::PathBuf;

use anyhow::Context;
use tracing::debug;
use url::Url;

use crate::event::media::{
    find_local_file, IMAGE_EXTENSIONS, IMAGE_FOLDER, VIDEO_EXTENSIONS, VIDEO_FOLDER,
};
use crate::event::topics::topic_page;
use crate::http::router::{is_file, RouteOutcome};

/// The kind of content an event lookup asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Text,
    Image,
    Video,
    Other,
}

impl ContentType {
    /// Parses the `type` query parameter. Unknown values become `Other`.
    pub fn from_param(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "text" => ContentType::Text,
            "image" => ContentType::Image,
            "video" => ContentType::Video,
            _ => ContentType::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventQuery {
    /// The keyword as sent, trimmed. May be empty or non-ASCII.
    pub keyword: String,
    pub content_type: ContentType,
}

impl EventQuery {
    pub fn new(keyword: &str, content_type: ContentType) -> Self {
        Self {
            keyword: keyword.trim().to_string(),
            content_type,
        }
    }
}

/// Where an event lookup ends up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// A path relative to the site root, e.g. `imgs/famine_photo.jpg`.
    Local(String),
    /// An absolute URL of an external search.
    External(String),
}

pub struct EventResolver {
    root: PathBuf,
    origin: Url,
}

impl EventResolver {
    pub fn new(root: impl Into<PathBuf>, origin: Url) -> Self {
        Self {
            root: root.into(),
            origin,
        }
    }

    /// Resolves a query to a redirect. Event lookups always redirect.
    pub async fn resolve(&self, query: &EventQuery) -> anyhow::Result<RouteOutcome> {
        let destination = self.destination(query).await?;
        debug!(keyword = %query.keyword, ?destination, "event resolved");
        Ok(RouteOutcome::Redirect(self.location(&destination)?))
    }

    pub async fn destination(&self, query: &EventQuery) -> anyhow::Result<Destination> {
        let keyword = query.keyword.as_str();
        let local = match query.content_type {
            ContentType::Text => match topic_page(keyword) {
                Some(page) => {
                    if is_file(&self.root.join(page)).await {
                        Some(page.to_string())
                    } else {
                        None
                    }
                }
                None => None,
            },
            ContentType::Image => {
                find_local_file(&self.root, IMAGE_FOLDER, keyword, IMAGE_EXTENSIONS)
                    .await
                    .context("searching local images")?
            }
            ContentType::Video => {
                find_local_file(&self.root, VIDEO_FOLDER, keyword, VIDEO_EXTENSIONS)
                    .await
                    .context("searching local videos")?
            }
            ContentType::Other => None,
        };

        Ok(match local {
            Some(path) => Destination::Local(path),
            None => Destination::External(external_search(query)),
        })
    }

    /// Turns a destination into the value of a `Location` header.
    pub fn location(&self, destination: &Destination) -> anyhow::Result<String> {
        match destination {
            Destination::Local(path) => {
                let url = self
                    .origin
                    .join(path)
                    .with_context(|| format!("building URL for {}", path))?;
                Ok(url.into())
            }
            Destination::External(url) => Ok(url.clone()),
        }
    }
}

/// Builds the external search URL used when nothing local matches.
///
/// The keyword is inserted as is apart from spaces.
pub fn external_search(query: &EventQuery) -> String {
    let keyword = query.keyword.as_str();
    match query.content_type {
        ContentType::Text => format!(
            "https://www.aljazeera.com/search/{}",
            keyword.replace(' ', "%20")
        ),
        ContentType::Image => format!(
            "https://www.google.com/search?q={}&udm=2",
            keyword.replace(' ', "+")
        ),
        ContentType::Video => format!(
            "https://www.youtube.com/results?search_query={}",
            keyword.replace(' ', "+")
        ),
        ContentType::Other => format!(
            "https://www.google.com/search?q={}",
            keyword.replace(' ', "+")
        ),
    }
}

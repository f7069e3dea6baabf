//! File type classification by extension.

const CONTENT_TYPES: &[(&str, &str)] = &[
    (".html", "text/html"),
    (".css", "text/css"),
    (".jpg", "image/jpeg"),
    (".jpeg", "image/jpeg"),
    (".png", "image/png"),
    (".mp4", "video/mp4"),
];

pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Returns the content type for `path`, matching its suffix case-sensitively.
pub fn content_type_for(path: &str) -> &'static str {
    CONTENT_TYPES
        .iter()
        .find(|(suffix, _)| path.ends_with(suffix))
        .map(|(_, content_type)| *content_type)
        .unwrap_or(DEFAULT_CONTENT_TYPE)
}

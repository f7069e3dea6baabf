//! Local media lookup.

use std::io;
use std::path::Path;

use tokio::fs;

use crate::event::topics::canonical_topic;

pub const IMAGE_FOLDER: &str = "imgs";
pub const IMAGE_EXTENSIONS: &[&str] = &[".jpg", ".png", ".jpeg"];
pub const VIDEO_FOLDER: &str = "videos";
pub const VIDEO_EXTENSIONS: &[&str] = &[".mp4"];

/// Finds a file in `root/folder` for `keyword`.
///
/// The keyword must map to a canonical topic. A file qualifies when its
/// lowercased name contains the topic id and ends with one of `extensions`.
/// The first qualifying entry in directory listing order is returned as
/// `folder/name`. That order is whatever the filesystem yields, so with
/// several candidates the choice is unspecified.
///
/// A missing folder means no match; other I/O errors are returned.
pub async fn find_local_file(
    root: &Path,
    folder: &str,
    keyword: &str,
    extensions: &[&str],
) -> io::Result<Option<String>> {
    let Some(topic) = canonical_topic(keyword) else {
        return Ok(None);
    };

    let mut entries = match fs::read_dir(root.join(folder)).await {
        Ok(entries) => entries,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err),
    };

    while let Some(entry) = entries.next_entry().await? {
        let name = entry.file_name();
        let name = name.to_string_lossy();
        let lower = name.to_lowercase();
        if lower.contains(topic.id())
            && extensions.iter().any(|ext| lower.ends_with(ext))
        {
            return Ok(Some(format!("{}/{}", folder, name)));
        }
    }

    Ok(None)
}

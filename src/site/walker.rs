//! Site tree discovery

use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// An HTML page found on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredPage {
    /// Path relative to the site root, `/`-separated
    pub url: String,
    /// Absolute (or root-joined) path on disk
    pub path: PathBuf,
}

/// Walks the site root and returns every `.html` file, sorted by path
///
/// Directories named in `ignore_dirs` are pruned, never descended into.
/// Entries that cannot be read are logged and skipped.
pub fn discover_pages(root: &Path, ignore_dirs: &[String]) -> Vec<DiscoveredPage> {
    let mut pages = Vec::new();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_ignored_dir(entry, ignore_dirs));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!("Skipping unreadable entry: {}", err);
                continue;
            }
        };

        if !entry.file_type().is_file() || !is_html(entry.path()) {
            continue;
        }

        match relative_url(root, entry.path()) {
            Some(url) => pages.push(DiscoveredPage {
                url,
                path: entry.path().to_path_buf(),
            }),
            None => tracing::warn!("Skipping page outside site root: {}", entry.path().display()),
        }
    }

    pages
}

fn is_ignored_dir(entry: &DirEntry, ignore_dirs: &[String]) -> bool {
    // The root itself is never pruned, whatever its name
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    entry
        .file_name()
        .to_str()
        .map(|name| ignore_dirs.iter().any(|d| d == name))
        .unwrap_or(false)
}

fn is_html(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("html")
}

/// Converts an on-disk path to a `/`-separated url relative to `root`
pub fn relative_url(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Option<Vec<&str>> = relative.components().map(|c| c.as_os_str().to_str()).collect();
    let url = parts?.join("/");
    if url.is_empty() {
        None
    } else {
        Some(url)
    }
}

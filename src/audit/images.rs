//! On-disk image reference checks

use crate::site::resolve_asset;
use std::path::Path;

/// Returns the image sources on `page_url` whose files do not exist
///
/// Sources are reported as written in the page, in document order. External
/// sources (`http*`, protocol-relative, `data:`) are never checked.
pub fn find_missing_images(sources: &[String], page_url: &str, root: &Path) -> Vec<String> {
    sources
        .iter()
        .filter(|src| match resolve_asset(page_url, src) {
            Some(rel) => !root.join(rel).exists(),
            None => false,
        })
        .cloned()
        .collect()
}

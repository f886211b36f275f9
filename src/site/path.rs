//! Site-relative path handling
//!
//! Page urls are paths relative to the site root, always `/`-separated and
//! without a leading slash (`blog/post-1.html`). Hrefs and image sources
//! found in a page are resolved against that page's directory.

/// Prefixes of hrefs that never point at a page inside the site
const EXTERNAL_PREFIXES: &[&str] = &[
    "#",
    "javascript:",
    "mailto:",
    "tel:",
    "data:",
    "http:",
    "https:",
    "//",
];

/// Returns true if an href can refer to a page inside the site
pub fn is_internal_href(href: &str) -> bool {
    let href = href.trim();
    if href.is_empty() {
        return false;
    }
    let lower = href.to_ascii_lowercase();
    !EXTERNAL_PREFIXES.iter().any(|p| lower.starts_with(p))
}

/// Resolves an anchor href found on `page_url` to a site-relative page url
///
/// Returns None for hrefs that leave the site or carry no path.
///
/// # Resolution Rules
///
/// - Query string and fragment are dropped
/// - `/x` is resolved from the site root
/// - `../x`, `./x` and bare `x` are resolved from the page's directory
/// - A directory target (trailing `/`) points at its `index.html`
///
/// # Examples
///
/// ```
/// use site_ledger::site::resolve_href;
///
/// assert_eq!(resolve_href("blog/post-1.html", "../index.html"), Some("index.html".to_string()));
/// assert_eq!(resolve_href("blog/post-1.html", "post-2.html#top"), Some("blog/post-2.html".to_string()));
/// assert_eq!(resolve_href("blog/post-1.html", "/learn/"), Some("learn/index.html".to_string()));
/// assert_eq!(resolve_href("index.html", "https://example.com/"), None);
/// ```
pub fn resolve_href(page_url: &str, href: &str) -> Option<String> {
    if !is_internal_href(href) {
        return None;
    }

    let target = strip_query_and_fragment(href.trim());
    if target.is_empty() {
        return None;
    }

    let mut resolved = resolve_against(page_url, target);
    if resolved.is_empty() || target.ends_with('/') {
        if !resolved.is_empty() {
            resolved.push('/');
        }
        resolved.push_str("index.html");
    }
    Some(resolved)
}

/// Resolves an asset reference (such as an `<img src>`) found on `page_url`
///
/// Returns None for external sources (`http*`, protocol-relative, `data:`),
/// which are never checked against disk.
pub fn resolve_asset(page_url: &str, src: &str) -> Option<String> {
    let src = src.trim();
    let lower = src.to_ascii_lowercase();
    if src.is_empty()
        || lower.starts_with("http")
        || lower.starts_with("//")
        || lower.starts_with("data:")
    {
        return None;
    }

    let target = strip_query_and_fragment(src);
    if target.is_empty() {
        return None;
    }
    Some(resolve_against(page_url, target))
}

/// Directory part of a page url, empty for pages at the root
pub fn parent_dir(url: &str) -> &str {
    match url.rfind('/') {
        Some(idx) => &url[..idx],
        None => "",
    }
}

/// Base file name of a page url
pub fn file_name(url: &str) -> &str {
    match url.rfind('/') {
        Some(idx) => &url[idx + 1..],
        None => url,
    }
}

/// Collapses `.` and `..` segments and repeated slashes
///
/// `..` segments that would climb above the site root are dropped.
pub fn normalize_relative(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => continue,
            ".." => {
                segments.pop();
            }
            _ => segments.push(segment),
        }
    }

    segments.join("/")
}

fn resolve_against(page_url: &str, target: &str) -> String {
    if let Some(rooted) = target.strip_prefix('/') {
        normalize_relative(rooted)
    } else {
        normalize_relative(&format!("{}/{}", parent_dir(page_url), target))
    }
}

fn strip_query_and_fragment(href: &str) -> &str {
    let end = href.find(|c: char| c == '?' || c == '#').unwrap_or(href.len());
    &href[..end]
}

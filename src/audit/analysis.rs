//! Pattern-based HTML analysis
//!
//! Every check is an independent predicate over the raw text. No DOM is
//! built, so a tag inside an HTML comment still counts as present.

use regex::Regex;
use std::sync::LazyLock;

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<title>([^<]+)</title>").expect("valid regex"));

static H1_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<h1[^>]*>").expect("valid regex"));

static REDIRECT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)http-equiv=["']refresh["']"#).expect("valid regex")
});

static VIDEO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<(iframe|video)").expect("valid regex"));

static YOUTUBE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)youtube\.com/(embed|watch)").expect("valid regex"));

static VIMEO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)vimeo\.com").expect("valid regex"));

static AUDIO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<audio").expect("valid regex"));

static AUDIO_EMBED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)soundcloud\.com|spotify\.com/embed|bandcamp\.com").expect("valid regex")
});

static IMG_SRC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<img[^>]+src=["']([^"']+)["']"#).expect("valid regex")
});

static IMG_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<img[^>]+>").expect("valid regex"));

static IFRAME_WIDTH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<iframe[^>]+width=["']([^"']+)["']"#).expect("valid regex")
});

/// Substrings any one of which marks a stylesheet as responsive
const RESPONSIVE_MARKERS: &[&str] = &["@media", "max-width", "grid-template-columns", "flex-wrap"];

/// Width units that scale with the viewport or font
const RELATIVE_UNITS: &[&str] = &["%", "vw", "vh", "em", "rem"];

/// Fixed-shape analysis record for one page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageAnalysis {
    /// Trimmed `<title>` text, empty when absent
    pub title: String,
    pub has_title: bool,
    pub has_h1: bool,
    pub has_viewport: bool,
    pub has_responsive_css: bool,
    pub has_footer_css: bool,
    pub has_footer_element: bool,
    pub is_redirect: bool,
    pub video_count: usize,
    pub youtube_count: usize,
    pub vimeo_count: usize,
    pub audio_count: usize,
    /// Hosted audio players (SoundCloud, Spotify, Bandcamp)
    pub audio_embed_count: usize,
    /// Every `<img src>` value, in document order
    pub image_sources: Vec<String>,
    pub images_without_alt: usize,
    pub fixed_width_iframes: usize,
}

impl PageAnalysis {
    pub fn has_video(&self) -> bool {
        self.video_count > 0 || self.youtube_count > 0 || self.vimeo_count > 0
    }

    pub fn has_audio(&self) -> bool {
        self.audio_count > 0 || self.audio_embed_count > 0
    }

    pub fn has_images(&self) -> bool {
        !self.image_sources.is_empty()
    }

    /// Viewport meta plus at least one responsive CSS signal
    pub fn is_mobile_responsive(&self) -> bool {
        self.has_viewport && self.has_responsive_css
    }
}

/// Analyzes one page's raw HTML
///
/// # Example
///
/// ```
/// use site_ledger::audit::analyze_html;
///
/// let html = r#"<html><head><title> Home </title></head><body><h1>Hi</h1><img src="a.png"></body></html>"#;
/// let analysis = analyze_html(html);
/// assert_eq!(analysis.title, "Home");
/// assert!(analysis.has_h1);
/// assert_eq!(analysis.images_without_alt, 1);
/// ```
pub fn analyze_html(html: &str) -> PageAnalysis {
    let lower = html.to_lowercase();

    let title = TITLE_RE
        .captures(html)
        .map(|c| c[1].trim().to_string());

    PageAnalysis {
        has_title: title.is_some(),
        title: title.unwrap_or_default(),
        has_h1: H1_RE.is_match(html),
        has_viewport: lower.contains("viewport"),
        has_responsive_css: RESPONSIVE_MARKERS.iter().any(|m| html.contains(m)),
        has_footer_css: html.contains(".footer"),
        has_footer_element: html.contains(r#"class="footer""#),
        is_redirect: REDIRECT_RE.is_match(html),
        video_count: VIDEO_RE.find_iter(html).count(),
        youtube_count: YOUTUBE_RE.find_iter(html).count(),
        vimeo_count: VIMEO_RE.find_iter(html).count(),
        audio_count: AUDIO_RE.find_iter(html).count(),
        audio_embed_count: AUDIO_EMBED_RE.find_iter(html).count(),
        image_sources: IMG_SRC_RE
            .captures_iter(html)
            .map(|c| c[1].to_string())
            .collect(),
        images_without_alt: IMG_TAG_RE
            .find_iter(html)
            .filter(|m| !m.as_str().to_lowercase().contains("alt="))
            .count(),
        fixed_width_iframes: IFRAME_WIDTH_RE
            .captures_iter(html)
            .filter(|c| is_fixed_width(&c[1]))
            .count(),
    }
}

/// A width is fixed when given in pixels with no relative unit
fn is_fixed_width(width: &str) -> bool {
    width.contains("px") && !RELATIVE_UNITS.iter().any(|u| width.contains(u))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document() {
        let analysis = analyze_html("");
        assert_eq!(analysis, PageAnalysis::default());
        assert!(!analysis.is_mobile_responsive());
    }

    #[test]
    fn test_title_spanning_lines() {
        let analysis = analyze_html("<TITLE>\n  My Page\n</TITLE>");
        assert!(analysis.has_title);
        assert_eq!(analysis.title, "My Page");
    }

    #[test]
    fn test_empty_title_does_not_count() {
        let analysis = analyze_html("<title></title>");
        assert!(!analysis.has_title);
    }

    #[test]
    fn test_h1_with_attributes() {
        assert!(analyze_html(r#"<h1 class="hero">Hi</h1>"#).has_h1);
        assert!(!analyze_html("<h2>Hi</h2>").has_h1);
    }

    #[test]
    fn test_responsive_requires_viewport() {
        let css_only = analyze_html("<style>@media (max-width: 600px) {}</style>");
        assert!(css_only.has_responsive_css);
        assert!(!css_only.is_mobile_responsive());

        let both = analyze_html(
            r#"<meta name="viewport" content="width=device-width"><style>.g { flex-wrap: wrap; }</style>"#,
        );
        assert!(both.is_mobile_responsive());

        let viewport_only = analyze_html(r#"<meta name="viewport" content="width=device-width">"#);
        assert!(!viewport_only.is_mobile_responsive());
    }

    #[test]
    fn test_images_and_alt() {
        let html = r#"
            <img src="a.png" alt="A">
            <img src='b.png'>
            <IMG SRC="c.png" ALT="">
        "#;
        let analysis = analyze_html(html);
        assert_eq!(analysis.image_sources, vec!["a.png", "b.png", "c.png"]);
        assert_eq!(analysis.images_without_alt, 1);
    }

    #[test]
    fn test_media_counts() {
        let html = r#"
            <iframe src="https://www.youtube.com/embed/abc" width="100%"></iframe>
            <video src="clip.mp4"></video>
            <audio src="song.mp3"></audio>
            <iframe src="https://w.soundcloud.com/player/?url=x"></iframe>
        "#;
        let analysis = analyze_html(html);
        assert_eq!(analysis.video_count, 3);
        assert_eq!(analysis.youtube_count, 1);
        assert_eq!(analysis.audio_count, 1);
        assert_eq!(analysis.audio_embed_count, 1);
        assert!(analysis.has_video());
        assert!(analysis.has_audio());
        assert_eq!(analysis.fixed_width_iframes, 0);
    }

    #[test]
    fn test_fixed_width_iframes() {
        let html = r#"
            <iframe width="560px" src="x"></iframe>
            <iframe width="100%" src="y"></iframe>
            <iframe width="560" src="z"></iframe>
            <iframe width="40rem" src="w"></iframe>
        "#;
        assert_eq!(analyze_html(html).fixed_width_iframes, 1);
    }

    #[test]
    fn test_footer_and_redirect() {
        let html = r#"<meta http-equiv="refresh" content="0; url=new.html"><div class="footer"></div>"#;
        let analysis = analyze_html(html);
        assert!(analysis.is_redirect);
        assert!(analysis.has_footer_element);
        assert!(!analysis.has_footer_css);
    }
}

//! Issue detection rules
//!
//! Findings are produced in a fixed order and each carries a fixed
//! human-readable message. The messages end up verbatim in the maintenance
//! log, so they must not change between runs.

use crate::audit::PageAnalysis;
use std::fmt;

/// Number of missing image names listed in a finding message
const MISSING_IMAGES_LISTED: usize = 3;

/// Kind of problem found on a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FindingKind {
    MissingH1,
    MissingTitle,
    MissingViewport,
    /// Number of `<img>` tags without an `alt` attribute
    MissingAltText(usize),
    /// Image sources that do not exist on disk
    MissingImageFiles(Vec<String>),
    /// Number of iframes with a fixed pixel width
    FixedWidthIframe(usize),
    FooterCssMissing,
    RedirectPage,
}

impl FindingKind {
    pub fn category(&self) -> IssueCategory {
        match self {
            FindingKind::MissingH1 => IssueCategory::MissingH1Tag,
            FindingKind::MissingTitle => IssueCategory::MissingTitleTag,
            FindingKind::MissingViewport => IssueCategory::MissingViewportMeta,
            FindingKind::MissingAltText(_) => IssueCategory::MissingAltTags,
            FindingKind::MissingImageFiles(_) => IssueCategory::MissingImageFiles,
            FindingKind::FixedWidthIframe(_) => IssueCategory::FixedWidthIframes,
            FindingKind::FooterCssMissing => IssueCategory::MissingFooterCss,
            FindingKind::RedirectPage => IssueCategory::RedirectPage,
        }
    }

    pub fn message(&self) -> String {
        match self {
            FindingKind::MissingH1 => {
                "Missing H1 tag - Critical SEO and accessibility issue".to_string()
            }
            FindingKind::MissingTitle => "Missing title tag - Critical for SEO".to_string(),
            FindingKind::MissingViewport => {
                "Missing viewport meta tag - Not mobile responsive".to_string()
            }
            FindingKind::MissingAltText(n) => {
                format!("{} image(s) missing alt tags - Accessibility issue", n)
            }
            FindingKind::MissingImageFiles(files) => {
                let mut list = files
                    .iter()
                    .take(MISSING_IMAGES_LISTED)
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join(", ");
                if files.len() > MISSING_IMAGES_LISTED {
                    list.push_str("...");
                }
                format!("Missing image files: {}", list)
            }
            FindingKind::FixedWidthIframe(_) => {
                "Video iframes have fixed pixel widths - May cause mobile overflow".to_string()
            }
            FindingKind::FooterCssMissing => {
                "Footer element referenced but no .footer CSS defined - May cause layout issues"
                    .to_string()
            }
            FindingKind::RedirectPage => {
                "This is a redirect page - Consider updating navigation to point directly to destination"
                    .to_string()
            }
        }
    }
}

/// A single problem found on a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditFinding {
    pub kind: FindingKind,
    pub message: String,
}

impl From<FindingKind> for AuditFinding {
    fn from(kind: FindingKind) -> Self {
        let message = kind.message();
        Self { kind, message }
    }
}

impl fmt::Display for AuditFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Aggregation bucket for findings in the summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IssueCategory {
    MissingH1Tag,
    MissingTitleTag,
    MissingViewportMeta,
    MissingAltTags,
    MissingImageFiles,
    FixedWidthIframes,
    MissingFooterCss,
    RedirectPage,
}

impl IssueCategory {
    pub const ALL: [IssueCategory; 8] = [
        IssueCategory::MissingH1Tag,
        IssueCategory::MissingTitleTag,
        IssueCategory::MissingViewportMeta,
        IssueCategory::MissingAltTags,
        IssueCategory::MissingImageFiles,
        IssueCategory::FixedWidthIframes,
        IssueCategory::MissingFooterCss,
        IssueCategory::RedirectPage,
    ];

    /// Categories called out separately in the summary
    pub const HIGH_PRIORITY: [IssueCategory; 3] = [
        IssueCategory::MissingImageFiles,
        IssueCategory::MissingH1Tag,
        IssueCategory::MissingViewportMeta,
    ];

    /// Stable snake_case key
    pub fn key(&self) -> &'static str {
        match self {
            IssueCategory::MissingH1Tag => "missing_h1_tag",
            IssueCategory::MissingTitleTag => "missing_title_tag",
            IssueCategory::MissingViewportMeta => "missing_viewport_meta",
            IssueCategory::MissingAltTags => "missing_alt_tags",
            IssueCategory::MissingImageFiles => "missing_image_files",
            IssueCategory::FixedWidthIframes => "fixed_width_iframes",
            IssueCategory::MissingFooterCss => "missing_footer_css",
            IssueCategory::RedirectPage => "redirect_page",
        }
    }

    /// Display title, e.g. "Missing H1 Tag"
    pub fn title(&self) -> &'static str {
        match self {
            IssueCategory::MissingH1Tag => "Missing H1 Tag",
            IssueCategory::MissingTitleTag => "Missing Title Tag",
            IssueCategory::MissingViewportMeta => "Missing Viewport Meta",
            IssueCategory::MissingAltTags => "Missing Alt Tags",
            IssueCategory::MissingImageFiles => "Missing Image Files",
            IssueCategory::FixedWidthIframes => "Fixed Width Iframes",
            IssueCategory::MissingFooterCss => "Missing Footer Css",
            IssueCategory::RedirectPage => "Redirect Page",
        }
    }
}

impl fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Applies the rule table to one page
pub fn detect_findings(analysis: &PageAnalysis, missing_images: &[String]) -> Vec<AuditFinding> {
    let mut kinds = Vec::new();

    if !analysis.has_h1 {
        kinds.push(FindingKind::MissingH1);
    }
    if !analysis.has_title {
        kinds.push(FindingKind::MissingTitle);
    }
    if !analysis.has_viewport {
        kinds.push(FindingKind::MissingViewport);
    }
    if analysis.images_without_alt > 0 {
        kinds.push(FindingKind::MissingAltText(analysis.images_without_alt));
    }
    if !missing_images.is_empty() {
        kinds.push(FindingKind::MissingImageFiles(missing_images.to_vec()));
    }
    if analysis.fixed_width_iframes > 0 {
        kinds.push(FindingKind::FixedWidthIframe(analysis.fixed_width_iframes));
    }
    if analysis.has_footer_element && !analysis.has_footer_css {
        kinds.push(FindingKind::FooterCssMissing);
    }
    if analysis.is_redirect {
        kinds.push(FindingKind::RedirectPage);
    }

    kinds.into_iter().map(AuditFinding::from).collect()
}

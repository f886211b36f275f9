//! Page type and template inference for the maintenance log

use crate::site::Cluster;
use std::fmt;

/// Value of the "Page Type" column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageType {
    EntryPoint,
    ModeConsume,
    ModeInteract,
    ModeLearn,
    ModeBusiness,
    PrimaryMode,
    ContentHub,
    UtilityPage,
    AboutPage,
    SeriesHub,
    SeriesEpisode,
    SpecialFeature,
    Visualization,
    BlogPost,
    Prototype,
    ResumeCv,
    LearnSubpage,
    BusinessSubpage,
    AboutSubpage,
    InteractiveSubpage,
    ContentPage,
}

impl PageType {
    pub fn label(&self) -> &'static str {
        match self {
            PageType::EntryPoint => "Entry Point",
            PageType::ModeConsume => "Mode (Consume)",
            PageType::ModeInteract => "Mode (Interact)",
            PageType::ModeLearn => "Mode (Learn)",
            PageType::ModeBusiness => "Mode (Business)",
            PageType::PrimaryMode => "Primary Mode",
            PageType::ContentHub => "Content Hub",
            PageType::UtilityPage => "Utility Page",
            PageType::AboutPage => "About Page",
            PageType::SeriesHub => "Series Hub",
            PageType::SeriesEpisode => "Series Episode",
            PageType::SpecialFeature => "Special Feature",
            PageType::Visualization => "Visualization",
            PageType::BlogPost => "Blog Post",
            PageType::Prototype => "Prototype",
            PageType::ResumeCv => "Resume/CV",
            PageType::LearnSubpage => "Learn Sub-page",
            PageType::BusinessSubpage => "Business Sub-page",
            PageType::AboutSubpage => "About Sub-page",
            PageType::InteractiveSubpage => "Interactive Sub-page",
            PageType::ContentPage => "Content Page",
        }
    }
}

impl fmt::Display for PageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Content directories, matched against `/<url>`
const DIRECTORY_TYPES: &[(&str, PageType)] = &[
    ("/blog/", PageType::BlogPost),
    ("/musical-poetry/", PageType::SeriesEpisode),
    ("/life-is-your-word/", PageType::SeriesEpisode),
    ("/visualizations/", PageType::Visualization),
    ("/resume_cv/", PageType::ResumeCv),
    ("/prototypes/", PageType::Prototype),
];

/// Infers the page type from its location first, then its cluster
pub fn classify_page_type(url: &str, cluster: Cluster) -> PageType {
    let rooted = format!("/{}", url);
    if let Some((_, page_type)) = DIRECTORY_TYPES.iter().find(|(dir, _)| rooted.contains(*dir)) {
        return *page_type;
    }

    if url.starts_with("blog/post-") {
        return PageType::BlogPost;
    }
    if url.contains("musical-poetry") || url.contains("life-is-your-word") {
        return PageType::SeriesEpisode;
    }
    if url.contains("resume_cv") {
        return PageType::ResumeCv;
    }

    match cluster {
        Cluster::Entry => PageType::EntryPoint,
        Cluster::PrimaryModes => {
            if url.contains("consume") {
                PageType::ModeConsume
            } else if url.contains("interact") {
                PageType::ModeInteract
            } else if url.contains("learn") {
                PageType::ModeLearn
            } else if url.contains("business") {
                PageType::ModeBusiness
            } else {
                PageType::PrimaryMode
            }
        }
        Cluster::ContentHubs => PageType::ContentHub,
        Cluster::Utility => PageType::UtilityPage,
        Cluster::About => PageType::AboutPage,
        Cluster::Series => PageType::SeriesHub,
        Cluster::Special => PageType::SpecialFeature,
        Cluster::Visualizations => PageType::Visualization,
        Cluster::BlogPosts => PageType::BlogPost,
        Cluster::Prototypes => PageType::Prototype,
        Cluster::LearnSubpages => PageType::LearnSubpage,
        Cluster::BusinessSubpages => PageType::BusinessSubpage,
        Cluster::AboutSubpages => PageType::AboutSubpage,
        Cluster::InteractSubpages => PageType::InteractiveSubpage,
        Cluster::Learn | Cluster::Business | Cluster::Interact | Cluster::Other => {
            PageType::ContentPage
        }
    }
}

/// Infers which page template a document was built from
///
/// Content markers are checked before url markers; the first hit wins.
pub fn detect_template(html: &str, url: &str) -> &'static str {
    let has = |needle: &str| html.contains(needle);

    if has("mode-selection") || has("experience-grid") {
        "Mode Selection"
    } else if has("amusements-navigation") || has("amusements-data") {
        "Amusements Hub"
    } else if has("blog-data") {
        "Blog Template"
    } else if html.to_lowercase().contains("supabase") {
        "Supabase Integrated"
    } else if has("tic-tac-toe") || has("game-board") {
        "Game Template"
    } else if has("dispatch-revenue") {
        "Revenue Reporting"
    } else if url.contains("visualizations") {
        "Visualization Template"
    } else if url.contains("/blog/") || url.contains("post-") {
        "Blog Post Template"
    } else if url.contains("musical-poetry") || url.contains("life-is-your-word") {
        "Series Episode Template"
    } else if url.contains("resume") {
        "Resume Template"
    } else {
        "Standard Template"
    }
}

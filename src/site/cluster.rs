//! Navigational clusters and the page classifier
//!
//! Every page discovered in the site tree is assigned to exactly one
//! [`Cluster`]. The assignment is a strict priority chain:
//!
//! 1. Exact file name table (user overrides first, then the built-in table)
//! 2. Content directory path rules
//! 3. Keyword rules inferring the enclosing navigational group
//! 4. [`Cluster::Other`]
//!
//! The first matching rule wins, so `blog/post-archive/index.html` is an
//! [`Cluster::Entry`] page even though it also sits under a blog post path.

use crate::config::Config;
use std::fmt;

/// Navigational group a page belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Cluster {
    Entry,
    PrimaryModes,
    ContentHubs,
    Utility,
    About,
    AboutSubpages,
    Series,
    Special,
    BlogPosts,
    Prototypes,
    Visualizations,
    Learn,
    LearnSubpages,
    Business,
    BusinessSubpages,
    Interact,
    InteractSubpages,
    Other,
}

impl Cluster {
    /// All clusters in the order they are written to the graph description
    pub const ALL: [Cluster; 18] = [
        Self::Entry,
        Self::PrimaryModes,
        Self::ContentHubs,
        Self::Utility,
        Self::About,
        Self::AboutSubpages,
        Self::Series,
        Self::Special,
        Self::BlogPosts,
        Self::Prototypes,
        Self::Visualizations,
        Self::Learn,
        Self::LearnSubpages,
        Self::Business,
        Self::BusinessSubpages,
        Self::Interact,
        Self::InteractSubpages,
        Self::Other,
    ];

    /// Human-readable cluster name, also used as the cluster label
    pub fn name(&self) -> &'static str {
        match self {
            Self::Entry => "Entry",
            Self::PrimaryModes => "Primary Modes",
            Self::ContentHubs => "Content Hubs",
            Self::Utility => "Utility",
            Self::About => "About",
            Self::AboutSubpages => "About Sub-pages",
            Self::Series => "Series",
            Self::Special => "Special",
            Self::BlogPosts => "Blog Posts",
            Self::Prototypes => "Prototypes",
            Self::Visualizations => "Visualizations",
            Self::Learn => "Learn",
            Self::LearnSubpages => "Learn Sub-pages",
            Self::Business => "Business",
            Self::BusinessSubpages => "Business Sub-pages",
            Self::Interact => "Interact",
            Self::InteractSubpages => "Interact Sub-pages",
            Self::Other => "Other",
        }
    }

    /// Identifier used in `subgraph cluster_<ident>` lines
    ///
    /// Only word characters, so the identifier survives a round trip
    /// through the graph description.
    pub fn ident(&self) -> &'static str {
        match self {
            Self::Entry => "Entry",
            Self::PrimaryModes => "Primary_Modes",
            Self::ContentHubs => "Content_Hubs",
            Self::Utility => "Utility",
            Self::About => "About",
            Self::AboutSubpages => "About_Subpages",
            Self::Series => "Series",
            Self::Special => "Special",
            Self::BlogPosts => "Blog_Posts",
            Self::Prototypes => "Prototypes",
            Self::Visualizations => "Visualizations",
            Self::Learn => "Learn",
            Self::LearnSubpages => "Learn_Subpages",
            Self::Business => "Business",
            Self::BusinessSubpages => "Business_Subpages",
            Self::Interact => "Interact",
            Self::InteractSubpages => "Interact_Subpages",
            Self::Other => "Other",
        }
    }

    /// Frame colour of the cluster block
    pub fn color(&self) -> &'static str {
        match self {
            Self::Entry => "#FFD700",
            Self::PrimaryModes => "#8B5CF6",
            Self::ContentHubs => "#A78BFA",
            Self::Utility => "#6B7280",
            Self::About => "#F472B6",
            Self::AboutSubpages => "#FBCFE8",
            Self::Series => "#FB923C",
            Self::Special => "#C084FC",
            Self::BlogPosts => "#F9A8D4",
            Self::Prototypes => "#818CF8",
            Self::Visualizations => "#38BDF8",
            Self::Learn => "#10B981",
            Self::LearnSubpages => "#34D399",
            Self::Business => "#F59E0B",
            Self::BusinessSubpages => "#FBBF24",
            Self::Interact => "#06B6D4",
            Self::InteractSubpages => "#67E8F9",
            Self::Other => "#E5E7EB",
        }
    }

    /// Parses a cluster from its display name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }

    /// Parses a cluster from a `cluster_<ident>` identifier
    ///
    /// Accepts both the canonical identifier and the display name with
    /// spaces replaced by underscores, as hand-edited files tend to use.
    pub fn from_ident(ident: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| {
            c.ident().eq_ignore_ascii_case(ident)
                || c.name().replace(' ', "_").eq_ignore_ascii_case(ident)
        })
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Result of classifying one page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub cluster: Cluster,
    /// Node fill colour; may differ from the cluster frame colour
    pub color: &'static str,
}

impl Classification {
    const fn new(cluster: Cluster, color: &'static str) -> Self {
        Self { cluster, color }
    }
}

#[derive(Debug, Clone)]
enum Matcher {
    /// Base file name equals the value
    FileNameIs(String),
    /// Relative path contains the value
    PathContains(&'static str),
    /// Base file name contains the value, unless it equals `unless`
    FileNameContains {
        needle: &'static str,
        unless: Option<&'static str>,
    },
}

impl Matcher {
    fn matches(&self, url: &str, file_name: &str) -> bool {
        match self {
            Self::FileNameIs(name) => file_name == name.as_str(),
            Self::PathContains(needle) => url.contains(*needle),
            Self::FileNameContains { needle, unless } => {
                file_name.contains(*needle) && !matches!(unless, Some(u) if file_name == *u)
            }
        }
    }
}

#[derive(Debug, Clone)]
struct Rule {
    matcher: Matcher,
    class: Classification,
}

impl Rule {
    fn exact(file_name: &str, cluster: Cluster, color: &'static str) -> Self {
        Self {
            matcher: Matcher::FileNameIs(file_name.to_string()),
            class: Classification::new(cluster, color),
        }
    }

    fn path(needle: &'static str, cluster: Cluster, color: &'static str) -> Self {
        Self {
            matcher: Matcher::PathContains(needle),
            class: Classification::new(cluster, color),
        }
    }

    fn name_contains(needle: &'static str, cluster: Cluster, color: &'static str) -> Self {
        Self {
            matcher: Matcher::FileNameContains {
                needle,
                unless: None,
            },
            class: Classification::new(cluster, color),
        }
    }
}

/// Static classification tables held by the extractor
#[derive(Debug, Clone)]
pub struct ClusterRules {
    exact: Vec<Rule>,
    directories: Vec<Rule>,
    keywords: Vec<Rule>,
}

impl Default for ClusterRules {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ClusterRules {
    /// Built-in tables for the site's known layout
    pub fn builtin() -> Self {
        use Cluster::*;

        let exact = vec![
            Rule::exact("index.html", Entry, Entry.color()),
            Rule::exact("consume.html", PrimaryModes, "#8B5CF6"),
            Rule::exact("interact.html", PrimaryModes, "#06B6D4"),
            Rule::exact("learn.html", PrimaryModes, "#10B981"),
            Rule::exact("do-business.html", PrimaryModes, "#F59E0B"),
            Rule::exact("amusements.html", ContentHubs, ContentHubs.color()),
            Rule::exact("shows.html", ContentHubs, ContentHubs.color()),
            Rule::exact("games.html", ContentHubs, ContentHubs.color()),
            Rule::exact("blogs-selection.html", ContentHubs, ContentHubs.color()),
            Rule::exact("blog.html", ContentHubs, ContentHubs.color()),
            Rule::exact("connect.html", Utility, Utility.color()),
            Rule::exact("links.html", Utility, Utility.color()),
            Rule::exact("privacy.html", Utility, Utility.color()),
            Rule::exact("terms.html", Utility, Utility.color()),
            Rule::exact("brands.html", About, About.color()),
            Rule::exact("musical-poetry.html", Series, Series.color()),
            Rule::exact("life-is-your-word.html", Series, Series.color()),
            Rule::exact("vision_2054_page.html", Special, Special.color()),
            Rule::exact("open-source-model.html", Special, Special.color()),
        ];

        let directories = vec![
            Rule::path("blog/post-", BlogPosts, BlogPosts.color()),
            Rule::path("prototypes/", Prototypes, Prototypes.color()),
            Rule::path("visualizations/", Visualizations, Visualizations.color()),
            Rule::path("resume_cv", Other, "#60A5FA"),
            Rule::path("musical-poetry/", Series, "#FDBA74"),
            Rule::path("life-is-your-word/", Series, "#FDBA74"),
        ];

        let keywords = vec![
            Rule::name_contains("amusements", ContentHubs, ContentHubs.color()),
            Rule::name_contains("shows", ContentHubs, ContentHubs.color()),
            Rule::name_contains("games", ContentHubs, ContentHubs.color()),
            Rule::name_contains("blog", ContentHubs, ContentHubs.color()),
            Rule::path("about-founder", LearnSubpages, LearnSubpages.color()),
            Rule::path("what-we-do", LearnSubpages, LearnSubpages.color()),
            Rule {
                matcher: Matcher::FileNameContains {
                    needle: "products",
                    unless: Some("products.html"),
                },
                class: Classification::new(BusinessSubpages, BusinessSubpages.color()),
            },
            Rule::name_contains("services", BusinessSubpages, BusinessSubpages.color()),
            Rule::name_contains("partner", BusinessSubpages, BusinessSubpages.color()),
            Rule::path("build-with", BusinessSubpages, "#FCD34D"),
            Rule::path("asabaal.html", AboutSubpages, "#F472B6"),
            Rule::path("asabaal-projects", AboutSubpages, AboutSubpages.color()),
            Rule::path("playlists", AboutSubpages, AboutSubpages.color()),
            Rule::path("advancements", AboutSubpages, AboutSubpages.color()),
            Rule::path("acts-of", AboutSubpages, AboutSubpages.color()),
            Rule::path("dispatch-revenue", InteractSubpages, InteractSubpages.color()),
            Rule::path("unity-remix", InteractSubpages, InteractSubpages.color()),
            Rule::path("tic-tac-toe", InteractSubpages, InteractSubpages.color()),
        ];

        Self {
            exact,
            directories,
            keywords,
        }
    }

    /// Built-in tables plus the exact file name overrides from the config
    ///
    /// Cluster names are validated when the config is loaded; an entry that
    /// still fails to parse is ignored.
    pub fn from_config(config: &Config) -> Self {
        let mut rules = Self::builtin();
        for entry in config.cluster.iter().rev() {
            if let Some(cluster) = Cluster::from_name(&entry.cluster) {
                rules = rules.with_exact(&entry.filename, cluster);
            }
        }
        rules
    }

    /// Adds an exact file name rule ahead of every existing one
    pub fn with_exact(mut self, file_name: &str, cluster: Cluster) -> Self {
        self.exact
            .insert(0, Rule::exact(file_name, cluster, cluster.color()));
        self
    }

    /// Classifies a page by its url relative to the site root
    pub fn classify(&self, url: &str) -> Classification {
        let file_name = super::path::file_name(url);

        self.exact
            .iter()
            .chain(&self.directories)
            .chain(&self.keywords)
            .find(|rule| rule.matcher.matches(url, file_name))
            .map(|rule| rule.class)
            .unwrap_or(Classification::new(Cluster::Other, Cluster::Other.color()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClusterOverride;

    fn cluster_of(url: &str) -> Cluster {
        ClusterRules::builtin().classify(url).cluster
    }

    #[test]
    fn test_exact_file_names() {
        assert_eq!(cluster_of("index.html"), Cluster::Entry);
        assert_eq!(cluster_of("consume.html"), Cluster::PrimaryModes);
        assert_eq!(cluster_of("do-business.html"), Cluster::PrimaryModes);
        assert_eq!(cluster_of("privacy.html"), Cluster::Utility);
        assert_eq!(cluster_of("brands.html"), Cluster::About);
        assert_eq!(cluster_of("open-source-model.html"), Cluster::Special);
    }

    #[test]
    fn test_exact_name_beats_directory_rule() {
        // Sits under a blog post path, but the file name rule comes first
        assert_eq!(cluster_of("blog/post-archive/index.html"), Cluster::Entry);
        assert_eq!(cluster_of("blog/post-1.html"), Cluster::BlogPosts);
    }

    #[test]
    fn test_directory_rules() {
        assert_eq!(
            cluster_of("visualizations/solar.html"),
            Cluster::Visualizations
        );
        assert_eq!(cluster_of("musical-poetry/season-1/ep-1.html"), Cluster::Series);

        let class = ClusterRules::builtin().classify("resume_cv/cv.html");
        assert_eq!(class.cluster, Cluster::Other);
        assert_eq!(class.color, "#60A5FA");
    }

    #[test]
    fn test_directory_rule_beats_keyword_rule() {
        // "blog" in the file name would make it a hub, the path rule wins
        assert_eq!(cluster_of("blog/post-blog-roll.html"), Cluster::BlogPosts);
    }

    #[test]
    fn test_keyword_rules() {
        assert_eq!(cluster_of("blog-archive.html"), Cluster::ContentHubs);
        assert_eq!(cluster_of("learn/about-founder.html"), Cluster::LearnSubpages);
        assert_eq!(cluster_of("premium-products.html"), Cluster::BusinessSubpages);
        assert_eq!(cluster_of("tic-tac-toe.html"), Cluster::InteractSubpages);
        assert_eq!(cluster_of("playlists.html"), Cluster::AboutSubpages);
    }

    #[test]
    fn test_keyword_exception() {
        assert_eq!(cluster_of("products.html"), Cluster::Other);
    }

    #[test]
    fn test_fallback_other() {
        assert_eq!(cluster_of("random/page.html"), Cluster::Other);
    }

    #[test]
    fn test_override_takes_priority() {
        let rules = ClusterRules::builtin().with_exact("index.html", Cluster::Utility);
        assert_eq!(rules.classify("index.html").cluster, Cluster::Utility);
    }

    #[test]
    fn test_from_config_keeps_entry_order() {
        let mut config = Config::default();
        config.cluster = vec![
            ClusterOverride {
                filename: "faq.html".to_string(),
                cluster: "Utility".to_string(),
            },
            ClusterOverride {
                filename: "faq.html".to_string(),
                cluster: "Special".to_string(),
            },
        ];
        let rules = ClusterRules::from_config(&config);
        // First configured entry wins
        assert_eq!(rules.classify("faq.html").cluster, Cluster::Utility);
    }

    #[test]
    fn test_name_and_ident_parsing() {
        for cluster in Cluster::ALL {
            assert_eq!(Cluster::from_name(cluster.name()), Some(cluster));
            assert_eq!(Cluster::from_ident(cluster.ident()), Some(cluster));
        }
        assert_eq!(Cluster::from_name("content hubs"), Some(Cluster::ContentHubs));
        assert_eq!(Cluster::from_ident("About_Sub-pages"), Some(Cluster::AboutSubpages));
        assert_eq!(Cluster::from_ident("Nowhere"), None);
    }
}

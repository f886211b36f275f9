//! Integration tests for the audit pipeline
//!
//! These tests build small site trees in temporary directories and run the
//! extract, write, parse, audit and report stages end-to-end.

use chrono::NaiveDate;
use site_ledger::audit::{Coordinator, FindingKind, MediaStatus};
use site_ledger::config::Config;
use site_ledger::graph::{extract_graph, parse_graph, parse_graph_file, render_graph};
use site_ledger::output::{format_broken_links, REPORT_COLUMNS};
use site_ledger::{Cluster, LedgerError};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const CLEAN_HEAD: &str = r#"<head>
<title>Page</title>
<meta name="viewport" content="width=device-width, initial-scale=1">
<style>@media (max-width: 600px) { nav { flex-wrap: wrap; } }</style>
</head>"#;

fn write_page(root: &Path, rel: &str, body: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, body).unwrap();
}

fn clean_page(links: &str) -> String {
    format!("<html>{}<body><h1>Page</h1>{}</body></html>", CLEAN_HEAD, links)
}

/// Creates a test configuration rooted at `root`
fn create_test_config(root: &Path) -> Config {
    let mut config = Config::default();
    config.site.root = root.to_path_buf();
    config
}

fn review_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
}

/// A small site with a hub, two posts, a utility page and a dead link
fn build_site(root: &Path) {
    write_page(
        root,
        "index.html",
        &clean_page(
            r#"<a href="blog.html">Blog</a>
               <a href="blog/post-1.html">Latest</a>
               <a href="links.html">Links</a>
               <a href="https://example.com/">Elsewhere</a>"#,
        ),
    );
    write_page(
        root,
        "blog.html",
        &clean_page(r#"<a href="blog/post-1.html">1</a><a href="blog/post-2.html">2</a>"#),
    );
    write_page(
        root,
        "blog/post-1.html",
        &clean_page(r#"<a href="post-2.html">Next</a><a href="../index.html">Home</a>"#),
    );
    write_page(
        root,
        "blog/post-2.html",
        &clean_page(r#"<a href="./post-1.html">Prev</a><a href="../retired.html">Old</a>"#),
    );
    write_page(root, "links.html", &clean_page(r##"<a href="#top">Top</a>"##));
    write_page(root, "node_modules/pkg/readme.html", "<h1>ignored</h1>");
}

#[test]
fn test_full_audit_one_row_per_page() {
    let dir = TempDir::new().unwrap();
    build_site(dir.path());

    let report = Coordinator::with_review_date(create_test_config(dir.path()), review_date())
        .run()
        .expect("audit run failed");

    let urls: Vec<_> = report.rows.iter().map(|r| r.page_url.as_str()).collect();
    assert_eq!(
        urls,
        vec![
            "blog.html",
            "blog/post-1.html",
            "blog/post-2.html",
            "index.html",
            "links.html",
        ]
    );

    // Files written next to the site
    assert!(dir.path().join("website-nav.dot").exists());
    assert!(dir.path().join("site_maintenance_log.csv").exists());

    let post_1 = &report.rows[1];
    assert_eq!(post_1.page_type, "Blog Post");
    assert_eq!(post_1.inbound_links, 3);
    assert_eq!(post_1.outbound_links, 2);
    assert!(post_1.human_identified_issues.is_empty());
    assert_eq!(post_1.detected_by, "Automated Scan");
    assert_eq!(post_1.last_reviewed_date, "2024-02-29");
    assert_eq!(post_1.mobile_responsive, MediaStatus::Yes);

    // The dead link to retired.html is not counted anywhere
    let post_2 = &report.rows[2];
    assert_eq!(post_2.outbound_links, 1);

    assert_eq!(report.summary.total_pages, 5);
    assert_eq!(report.summary.pages_with_issues, 0);
    assert_eq!(report.summary.percent(report.summary.mobile_yes), 100);
}

#[test]
fn test_csv_header_and_rows() {
    let dir = TempDir::new().unwrap();
    build_site(dir.path());

    let config = create_test_config(dir.path());
    let csv_path = config.report_path();
    Coordinator::with_review_date(config, review_date())
        .run()
        .unwrap();

    let mut reader = csv::Reader::from_path(&csv_path).unwrap();
    let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
    assert_eq!(headers.len(), 17);
    assert_eq!(headers, REPORT_COLUMNS.to_vec());
    assert_eq!(reader.records().count(), 5);
}

#[test]
fn test_empty_site_still_writes_header() {
    let dir = TempDir::new().unwrap();
    let config = create_test_config(dir.path());
    let csv_path = config.report_path();

    let report = Coordinator::with_review_date(config, review_date())
        .run()
        .unwrap();

    assert!(report.rows.is_empty());
    assert_eq!(report.summary.percent(0), 0);
    let content = fs::read_to_string(&csv_path).unwrap();
    assert_eq!(content.lines().count(), 1);
    assert!(content.starts_with("Page URL,"));
}

#[test]
fn test_page_missing_on_disk_produces_no_row() {
    let dir = TempDir::new().unwrap();
    build_site(dir.path());

    let coordinator = Coordinator::with_review_date(create_test_config(dir.path()), review_date());
    coordinator.build_graph().unwrap();

    // Page removed between extraction and audit
    fs::remove_file(dir.path().join("links.html")).unwrap();

    let report = coordinator.audit().unwrap();
    assert_eq!(report.rows.len(), 4);
    assert!(report.rows.iter().all(|r| r.page_url != "links.html"));
}

#[test]
fn test_extract_write_parse_round_trip() {
    let dir = TempDir::new().unwrap();
    build_site(dir.path());

    let config = create_test_config(dir.path());
    let extracted = extract_graph(&config).unwrap();
    let parsed = parse_graph(&render_graph(&extracted));

    let extracted_urls: Vec<_> = extracted.nodes.keys().collect();
    let parsed_urls: Vec<_> = parsed.nodes.keys().collect();
    assert_eq!(extracted_urls, parsed_urls);
    assert_eq!(parsed.edges.len(), extracted.resolved_edges().count());
    assert_eq!(parsed.dangling.len(), extracted.dangling_edges().count());

    for (url, node) in &extracted.nodes {
        assert_eq!(parsed.nodes[url].cluster, node.cluster);
        assert_eq!(parsed.nodes[url].color, node.color);
    }

    // Parsing is deterministic
    assert_eq!(parse_graph(&render_graph(&extracted)), parsed);
}

#[test]
fn test_round_trip_keeps_page_named_like_keyword() {
    let dir = TempDir::new().unwrap();
    write_page(
        dir.path(),
        "index.html",
        &clean_page(r#"<a href="learn/subgraph-basics.html">Basics</a>"#),
    );
    write_page(
        dir.path(),
        "learn/subgraph-basics.html",
        &clean_page(r#"<a href="../index.html">Home</a>"#),
    );

    let extracted = extract_graph(&create_test_config(dir.path())).unwrap();
    let parsed = parse_graph(&render_graph(&extracted));

    assert_eq!(parsed.nodes.len(), 2);
    assert_eq!(parsed.edges.len(), 2);
    assert_eq!(parsed.counts.inbound("learn/subgraph-basics.html"), 1);
    assert_eq!(parsed.counts.outbound("learn/subgraph-basics.html"), 1);

    let report = Coordinator::with_review_date(create_test_config(dir.path()), review_date())
        .run()
        .unwrap();
    let urls: Vec<_> = report.rows.iter().map(|r| r.page_url.as_str()).collect();
    assert_eq!(urls, vec!["index.html", "learn/subgraph-basics.html"]);
}

#[test]
fn test_broken_links_reported_when_enabled() {
    let dir = TempDir::new().unwrap();
    build_site(dir.path());

    let mut config = create_test_config(dir.path());
    config.audit.report_broken_links = true;
    let graph_path = config.graph_path();

    let report = Coordinator::with_review_date(config, review_date())
        .run()
        .unwrap();
    assert_eq!(report.rows.len(), 5);

    let graph = parse_graph_file(&graph_path).unwrap();
    let listing = format_broken_links(&graph.dangling);
    assert!(listing.contains("Broken internal links (1):"));
    assert!(listing.contains("  - blog/post-2.html -> retired.html"));
}

#[test]
fn test_classification_priority() {
    let dir = TempDir::new().unwrap();
    write_page(dir.path(), "blog/post-archive/index.html", "<h1>x</h1>");
    write_page(dir.path(), "blog/post-9.html", "<h1>x</h1>");
    write_page(dir.path(), "services.html", "<h1>x</h1>");
    write_page(dir.path(), "whatever.html", "<h1>x</h1>");

    let graph = extract_graph(&create_test_config(dir.path())).unwrap();
    assert_eq!(graph.nodes["blog/post-archive/index.html"].cluster, Cluster::Entry);
    assert_eq!(graph.nodes["blog/post-9.html"].cluster, Cluster::BlogPosts);
    assert_eq!(graph.nodes["services.html"].cluster, Cluster::BusinessSubpages);
    assert_eq!(graph.nodes["whatever.html"].cluster, Cluster::Other);
}

#[test]
fn test_four_finding_page() {
    let dir = TempDir::new().unwrap();
    write_page(
        dir.path(),
        "bare.html",
        r#"<html><body><p>Hello</p><img src="photo.png"></body></html>"#,
    );
    fs::write(dir.path().join("photo.png"), b"png").unwrap();

    let coordinator = Coordinator::with_review_date(create_test_config(dir.path()), review_date());
    let report = coordinator.run().unwrap();

    let row = &report.rows[0];
    assert_eq!(
        row.issues_text(),
        "Missing H1 tag - Critical SEO and accessibility issue; \
         Missing title tag - Critical for SEO; \
         Missing viewport meta tag - Not mobile responsive; \
         1 image(s) missing alt tags - Accessibility issue"
    );
    assert_eq!(row.mobile_responsive, MediaStatus::No);
    assert_eq!(row.image_assets_loaded, MediaStatus::Yes);
    assert_eq!(row.video_embed_working, MediaStatus::NotApplicable);
    assert_eq!(report.summary.issue_breakdown().len(), 4);
}

#[test]
fn test_missing_image_file() {
    let dir = TempDir::new().unwrap();
    write_page(
        dir.path(),
        "gallery.html",
        &clean_page(r#"<img src="missing.png" alt="Gone"><img src="https://cdn.example.com/x.png" alt="Remote">"#),
    );

    let report = Coordinator::with_review_date(create_test_config(dir.path()), review_date())
        .run()
        .unwrap();

    let row = &report.rows[0];
    assert_eq!(row.image_assets_loaded, MediaStatus::No);
    assert!(row.issues_text().contains("missing.png"));
    assert!(!row.issues_text().contains("cdn.example.com"));
}

#[test]
fn test_page_without_images_is_not_applicable() {
    let dir = TempDir::new().unwrap();
    write_page(dir.path(), "plain.html", &clean_page(""));

    let report = Coordinator::with_review_date(create_test_config(dir.path()), review_date())
        .run()
        .unwrap();
    assert_eq!(report.rows[0].image_assets_loaded, MediaStatus::NotApplicable);
}

#[test]
fn test_audit_only_with_hand_edited_graph() {
    let dir = TempDir::new().unwrap();
    write_page(dir.path(), "index.html", &clean_page(""));
    write_page(dir.path(), "about.html", &clean_page(""));
    fs::write(
        dir.path().join("website-nav.dot"),
        r##"digraph WebsiteNavigation {
    subgraph cluster_Entry {
        "index.html" [label="Home", fillcolor="#FFD700"];
    }
    "about.html" [label="about.html", fillcolor="#E5E7EB"];
    "index.html" -> "about.html";
    "index.html" -> "nowhere.html";
    // "about.html" -> "index.html";
}
"##,
    )
    .unwrap();

    let report = Coordinator::with_review_date(create_test_config(dir.path()), review_date())
        .audit()
        .unwrap();

    assert_eq!(report.rows.len(), 2);
    let about = &report.rows[0];
    assert_eq!(about.page_url, "about.html");
    assert_eq!(about.page_type, "Content Page");
    assert_eq!(about.inbound_links, 1);
    assert_eq!(about.outbound_links, 0);
    let index = &report.rows[1];
    assert_eq!(index.page_type, "Entry Point");
    assert_eq!(index.outbound_links, 1);
}

#[test]
fn test_summary_file_written_when_configured() {
    let dir = TempDir::new().unwrap();
    write_page(dir.path(), "index.html", "<p>no heading</p>");

    let mut config = create_test_config(dir.path());
    config.output.summary_path = Some("audit-summary.md".into());
    Coordinator::with_review_date(config, review_date())
        .run()
        .unwrap();

    let md = fs::read_to_string(dir.path().join("audit-summary.md")).unwrap();
    assert!(md.contains("| Missing H1 Tag | 1 |"));
}

#[test]
fn test_missing_site_root_is_fatal() {
    let config = create_test_config(Path::new("/nonexistent/site-ledger/root"));
    let result = Coordinator::new(config).run();
    assert!(matches!(result, Err(LedgerError::SiteRootNotFound { .. })));
}

#[test]
fn test_missing_graph_description_is_fatal() {
    let dir = TempDir::new().unwrap();
    let result = parse_graph_file(&dir.path().join("website-nav.dot"));
    assert!(result.is_err());
}

#[test]
fn test_finding_kinds_exposed() {
    let dir = TempDir::new().unwrap();
    let audit = site_ledger::audit::audit_page(
        "redirect.html",
        Cluster::Other,
        r#"<meta http-equiv="refresh" content="0; url=index.html">"#,
        dir.path(),
    );
    assert!(audit
        .findings
        .iter()
        .any(|f| f.kind == FindingKind::RedirectPage));
}

//! Site tree module for Site-Ledger
//!
//! This module provides page discovery, site-relative path resolution, and
//! the navigational cluster classifier.

mod cluster;
mod path;
mod walker;

pub use cluster::{Classification, Cluster, ClusterRules};
pub use path::{
    file_name, is_internal_href, normalize_relative, parent_dir, resolve_asset, resolve_href,
};
pub use walker::{discover_pages, relative_url, DiscoveredPage};

//! Configuration module for Site-Ledger
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every section is optional, so the tool also runs with [`Config::default`].
//!
//! # Example
//!
//! ```no_run
//! use site_ledger::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("site-ledger.toml")).unwrap();
//! println!("Graph description: {}", config.graph_path().display());
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    AuditConfig, ClusterOverride, Config, OutputConfig, SiteConfig, DEFAULT_IGNORE_DIRS,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};

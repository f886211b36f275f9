//! Site-Ledger main entry point
//!
//! This is the command-line interface for the Site-Ledger maintenance auditor.

use clap::Parser;
use site_ledger::audit::Coordinator;
use site_ledger::config::{load_config_with_hash, Config};
use site_ledger::graph::parse_graph_file;
use site_ledger::output::print_graph_statistics;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Site-Ledger: a static site navigation mapper and maintenance auditor
///
/// Site-Ledger walks a directory of HTML pages, writes the internal link
/// graph as a Graphviz-compatible description, audits every page for
/// structural and accessibility problems, and writes a CSV maintenance log.
#[derive(Parser, Debug)]
#[command(name = "site-ledger")]
#[command(version = "1.0.0")]
#[command(about = "A static site navigation mapper and maintenance auditor", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults when omitted)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Site root directory, overriding the configuration
    #[arg(long, value_name = "DIR")]
    root: Option<PathBuf>,

    /// Maintenance log path, overriding the configuration
    #[arg(short, long, value_name = "CSV")]
    output: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Extract the link graph and write the graph description only
    #[arg(long, conflicts_with_all = ["audit_only", "dry_run", "stats"])]
    graph_only: bool,

    /// Audit against an existing graph description without re-extracting
    #[arg(long, conflicts_with_all = ["graph_only", "dry_run", "stats"])]
    audit_only: bool,

    /// Validate config and show what would be audited without writing anything
    #[arg(long, conflicts_with_all = ["graph_only", "audit_only", "stats"])]
    dry_run: bool,

    /// Show statistics from an existing graph description and exit
    #[arg(long, conflicts_with_all = ["graph_only", "audit_only", "dry_run"])]
    stats: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            match load_config_with_hash(path) {
                Ok((cfg, hash)) => {
                    tracing::info!("Configuration loaded successfully (hash: {})", hash);
                    cfg
                }
                Err(e) => {
                    tracing::error!("Failed to load configuration: {}", e);
                    return Err(e.into());
                }
            }
        }
        None => {
            tracing::info!("No configuration file given, using defaults");
            Config::default()
        }
    };

    // Command-line overrides; relative paths are taken from the working directory
    if let Some(root) = cli.root {
        config.site.root = root;
    }
    if let Some(output) = cli.output {
        config.output.report_path = if output.is_absolute() {
            output
        } else {
            std::env::current_dir()?.join(output)
        };
    }

    // Handle different modes
    if cli.dry_run {
        handle_dry_run(&config);
    } else if cli.stats {
        handle_stats(&config)?;
    } else if cli.graph_only {
        handle_graph_only(config)?;
    } else if cli.audit_only {
        handle_audit(config, false)?;
    } else {
        handle_audit(config, true)?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("site_ledger=info,warn"),
            1 => EnvFilter::new("site_ledger=debug,info"),
            2 => EnvFilter::new("site_ledger=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: shows the effective configuration
fn handle_dry_run(config: &Config) {
    println!("=== Site-Ledger Dry Run ===\n");

    println!("Site:");
    println!("  Root: {}", config.site.root.display());
    println!("  Ignored directories ({}):", config.site.ignore_dirs.len());
    for dir in &config.site.ignore_dirs {
        println!("    - {}", dir);
    }

    println!("\nOutput:");
    println!("  Graph description: {}", config.graph_path().display());
    println!("  Maintenance log: {}", config.report_path().display());
    match config.summary_path() {
        Some(path) => println!("  Summary: {}", path.display()),
        None => println!("  Summary: (disabled)"),
    }

    println!("\nAudit:");
    println!(
        "  Report broken links: {}",
        config.audit.report_broken_links
    );

    println!("\nCluster Overrides ({}):", config.cluster.len());
    for entry in &config.cluster {
        println!("  - {} -> {}", entry.filename, entry.cluster);
    }

    println!("\n✓ Configuration is valid");
    if config.site.root.is_dir() {
        println!("✓ Would audit pages under {}", config.site.root.display());
    } else {
        println!(
            "✗ Site root {} does not exist",
            config.site.root.display()
        );
    }
}

/// Handles the --stats mode: shows statistics from the graph description
fn handle_stats(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let path = config.graph_path();
    println!("Graph description: {}\n", path.display());

    let graph = parse_graph_file(&path)?;
    print_graph_statistics(&graph);

    Ok(())
}

/// Handles the --graph-only mode
fn handle_graph_only(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let coordinator = Coordinator::new(config);
    let graph = coordinator.build_graph()?;

    println!(
        "✓ Graph description written to: {} ({} pages, {} links)",
        coordinator.config().graph_path().display(),
        graph.nodes.len(),
        graph.edges.len()
    );
    println!(
        "  Render with: dot -Tpng {} -o website-nav.png",
        coordinator.config().graph_path().display()
    );

    Ok(())
}

/// Handles the main audit operation
fn handle_audit(config: Config, extract: bool) -> Result<(), Box<dyn std::error::Error>> {
    let coordinator = Coordinator::new(config);

    let result = if extract {
        coordinator.run()
    } else {
        tracing::info!("Auditing against existing graph description");
        coordinator.audit()
    };

    match result {
        Ok(report) => {
            tracing::info!("Audit completed: {} pages", report.rows.len());
            Ok(())
        }
        Err(e) => {
            tracing::error!("Audit failed: {}", e);
            Err(e.into())
        }
    }
}

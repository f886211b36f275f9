use crate::config::types::{ClusterOverride, Config, OutputConfig, SiteConfig};
use crate::site::Cluster;
use crate::{ConfigError, ConfigResult};

/// Validates the entire configuration
pub fn validate(config: &Config) -> ConfigResult<()> {
    validate_site_config(&config.site)?;
    validate_output_config(&config.output)?;
    validate_cluster_overrides(&config.cluster)?;
    Ok(())
}

/// Validates site configuration
fn validate_site_config(config: &SiteConfig) -> ConfigResult<()> {
    if config.root.as_os_str().is_empty() {
        return Err(ConfigError::Validation("root cannot be empty".to_string()));
    }

    for dir in &config.ignore_dirs {
        if dir.is_empty() {
            return Err(ConfigError::Validation(
                "ignore-dirs entries cannot be empty".to_string(),
            ));
        }
        // Entries are matched against single directory names, never paths
        if dir.contains('/') || dir.contains('\\') {
            return Err(ConfigError::Validation(format!(
                "ignore-dirs entry '{}' must be a directory name, not a path",
                dir
            )));
        }
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> ConfigResult<()> {
    if config.graph_path.as_os_str().is_empty() {
        return Err(ConfigError::Validation(
            "graph-path cannot be empty".to_string(),
        ));
    }

    if config.report_path.as_os_str().is_empty() {
        return Err(ConfigError::Validation(
            "report-path cannot be empty".to_string(),
        ));
    }

    if let Some(summary) = &config.summary_path {
        if summary.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "summary-path cannot be empty when set".to_string(),
            ));
        }
    }

    Ok(())
}

/// Validates exact file name cluster overrides
fn validate_cluster_overrides(overrides: &[ClusterOverride]) -> ConfigResult<()> {
    for entry in overrides {
        validate_override_filename(&entry.filename)?;

        if Cluster::from_name(&entry.cluster).is_none() {
            return Err(ConfigError::UnknownCluster(entry.cluster.clone()));
        }
    }
    Ok(())
}

/// Override file names are compared against the page's base name only
fn validate_override_filename(filename: &str) -> ConfigResult<()> {
    if filename.is_empty() {
        return Err(ConfigError::Validation(
            "cluster filename cannot be empty".to_string(),
        ));
    }

    if filename.contains('/') || filename.contains('\\') {
        return Err(ConfigError::Validation(format!(
            "cluster filename '{}' must be a bare file name",
            filename
        )));
    }

    if !filename.ends_with(".html") {
        return Err(ConfigError::Validation(format!(
            "cluster filename '{}' must end with .html",
            filename
        )));
    }

    Ok(())
}

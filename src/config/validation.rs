use log::{info, warn};

use crate::config::IndexerConfig;
use crate::utils::error::{BoxResult, IndexerError};
use crate::utils::fs;

/// Validate the configuration
pub fn validate_config(config: &IndexerConfig) -> BoxResult<()> {
    validate_source_directory(config)?;
    validate_pattern(config)?;
    validate_history(config)?;
    validate_formats(config)?;

    if config.description_length == 0 {
        warn!("description_length is 0, descriptions will only contain the ellipsis");
    }

    Ok(())
}

/// Validate the source directory
fn validate_source_directory(config: &IndexerConfig) -> BoxResult<()> {
    let source = &config.source;

    if !source.exists() {
        return Err(IndexerError::Config(format!(
            "Source directory does not exist: {}", source.display()
        )).into());
    }

    if !fs::is_directory(source) {
        return Err(IndexerError::Config(format!(
            "Source path is not a directory: {}", source.display()
        )).into());
    }

    info!("Source directory: {}", source.display());
    Ok(())
}

/// Validate the article and exclude globs
fn validate_pattern(config: &IndexerConfig) -> BoxResult<()> {
    glob::Pattern::new(&config.pattern)
        .map_err(|e| IndexerError::Config(format!("Invalid pattern '{}': {}", config.pattern, e)))?;

    for exclude in &config.exclude {
        glob::Pattern::new(exclude)
            .map_err(|e| IndexerError::Config(format!("Invalid exclude '{}': {}", exclude, e)))?;
    }
    Ok(())
}

/// Validate the history command settings
fn validate_history(config: &IndexerConfig) -> BoxResult<()> {
    if config.git_timeout_ms == 0 {
        return Err(IndexerError::Config("git_timeout_ms must be greater than 0".to_string()).into());
    }
    if config.git_binary.trim().is_empty() {
        return Err(IndexerError::Config("git_binary must not be empty".to_string()).into());
    }
    Ok(())
}

/// Validate the date layouts
fn validate_formats(config: &IndexerConfig) -> BoxResult<()> {
    for (name, format) in [
        ("date_format", &config.date_format),
        ("month_format", &config.month_format),
        ("day_format", &config.day_format),
    ] {
        if format.is_empty() {
            return Err(IndexerError::Config(format!("{} must not be empty", name)).into());
        }
        if chrono::format::StrftimeItems::new(format).any(|item| item == chrono::format::Item::Error) {
            return Err(IndexerError::Config(format!("{} is not a valid date format: {}", name, format)).into());
        }
    }
    Ok(())
}

use std::path::{Path, PathBuf};

use log::debug;
use serde_json::Value;

use crate::config::types::IndexerConfig;
use crate::config::validation;
use crate::utils::error::{BoxResult, IndexerError};
use crate::utils::fs;

/// Configuration file names to look for
const CONFIG_FILES: [&str; 4] = ["_indexer.yml", "_indexer.yaml", "_indexer.toml", "_indexer.json"];

/// Load indexer configuration.
///
/// Explicit `config_files` are merged in order, later keys winning. Without
/// them the first default file found in `source_dir` is used, if any.
/// `source_override` replaces any configured `source` before validation.
pub fn load_config<P: AsRef<Path>>(
    source_dir: P,
    config_files: Option<Vec<PathBuf>>,
    source_override: Option<&Path>,
) -> BoxResult<IndexerConfig> {
    let config_paths = match config_files {
        Some(paths) if !paths.is_empty() => paths,
        _ => find_default_config_file(&source_dir).into_iter().collect(),
    };

    let mut merged = Value::Object(Default::default());
    if config_paths.is_empty() {
        debug!("No configuration files found, using defaults");
    }
    for path in &config_paths {
        debug!("Loading configuration from {}", path.display());
        merge_values(&mut merged, load_document(path)?);
    }

    let has_source = merged.get("source").is_some();
    let mut config: IndexerConfig = serde_json::from_value(merged)
        .map_err(|e| IndexerError::Config(format!("Invalid configuration: {}", e)))?;

    match source_override {
        Some(source) => config.source = source.to_path_buf(),
        // Without an explicit `source`, index the directory the config was looked up in
        None if !has_source => config.source = source_dir.as_ref().to_path_buf(),
        None => {}
    }

    validation::validate_config(&config)?;

    debug!("Configuration loaded: {:?}", config);
    Ok(config)
}

/// Find the default configuration file
fn find_default_config_file<P: AsRef<Path>>(source_dir: P) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| source_dir.as_ref().join(name))
        .find(|path| path.exists())
}

/// Read a YAML, TOML or JSON document into a JSON value, by file extension
pub fn load_document(path: &Path) -> BoxResult<Value> {
    if !path.exists() {
        return Err(IndexerError::Config(format!(
            "Configuration file not found: {}", path.display()
        )).into());
    }

    let content = fs::read_file(path)
        .map_err(|e| IndexerError::Config(format!(
            "Failed to read configuration file {}: {}", path.display(), e
        )))?;

    let ext = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "toml" => parse_toml(&content, path),
        "json" => parse_json(&content, path),
        // Assume YAML for .yml, .yaml and anything without an extension
        "yml" | "yaml" | "" => parse_yaml(&content, path),
        other => Err(IndexerError::Config(format!(
            "Unsupported configuration file format: {}", other
        )).into()),
    }
}

/// Parse a YAML document
fn parse_yaml(content: &str, path: &Path) -> BoxResult<Value> {
    let yaml: serde_yaml::Value = serde_yaml::from_str(content)
        .map_err(|e| IndexerError::Config(format!(
            "Failed to parse YAML configuration ({}): {}", path.display(), e
        )))?;

    // An empty file parses as null
    if yaml.is_null() {
        return Ok(Value::Object(Default::default()));
    }

    serde_json::to_value(yaml)
        .map_err(|e| IndexerError::Config(format!(
            "Unsupported YAML value in {}: {}", path.display(), e
        )).into())
}

/// Parse a TOML document
fn parse_toml(content: &str, path: &Path) -> BoxResult<Value> {
    let table: toml::Table = toml::from_str(content)
        .map_err(|e| IndexerError::Config(format!(
            "Failed to parse TOML configuration ({}): {}", path.display(), e
        )))?;

    Ok(serde_json::to_value(table)?)
}

/// Parse a JSON document
fn parse_json(content: &str, path: &Path) -> BoxResult<Value> {
    serde_json::from_str(content)
        .map_err(|e| IndexerError::Config(format!(
            "Failed to parse JSON configuration ({}): {}", path.display(), e
        )).into())
}

/// Deep-merge `source` into `target`; objects merge key by key, anything else replaces
pub fn merge_values(target: &mut Value, source: Value) {
    match (target, source) {
        (Value::Object(target_map), Value::Object(source_map)) => {
            for (key, value) in source_map {
                match target_map.get_mut(&key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        target_map.insert(key, value);
                    }
                }
            }
        }
        (target, source) => *target = source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults_without_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(dir.path(), None, None).unwrap();

        assert_eq!(config.source, dir.path());
        assert_eq!(config.description_length, 120);
    }

    #[test]
    fn test_finds_default_yaml() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("_indexer.yml"), "description_length: 60\n").unwrap();

        let config = load_config(dir.path(), None, None).unwrap();
        assert_eq!(config.description_length, 60);
    }

    #[test]
    fn test_explicit_files_merge_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("base.toml");
        let local = dir.path().join("local.json");
        std::fs::write(&base, "description_length = 90\nellipsis = \"…\"\n").unwrap();
        std::fs::write(&local, r#"{"description_length": 30}"#).unwrap();

        let config = load_config(dir.path(), Some(vec![base, local]), None).unwrap();
        assert_eq!(config.description_length, 30);
        assert_eq!(config.ellipsis, "…");
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.yml");
        assert!(load_config(dir.path(), Some(vec![missing]), None).is_err());
    }

    #[test]
    fn test_explicit_dot_source_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = dir.path().join("indexer.yml");
        std::fs::write(&cfg, "source: .\n").unwrap();

        let config = load_config(dir.path(), Some(vec![cfg]), None).unwrap();
        assert_eq!(config.source, PathBuf::from("."));
    }

    #[test]
    fn test_source_override_is_validated() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = dir.path().join("indexer.yml");
        std::fs::write(&cfg, format!("source: {}\n", dir.path().display())).unwrap();
        let missing = dir.path().join("missing");

        let result = load_config(dir.path(), Some(vec![cfg]), Some(&missing));
        assert!(result.is_err());
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let ini = dir.path().join("config.ini");
        std::fs::write(&ini, "a=1").unwrap();
        assert!(load_document(&ini).is_err());
    }

    #[test]
    fn test_empty_yaml_is_empty_object() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("empty.yml");
        std::fs::write(&file, "").unwrap();
        assert_eq!(load_document(&file).unwrap(), json!({}));
    }

    #[test]
    fn test_merge_values() {
        let mut target = json!({"a": 1, "nested": {"x": 1, "y": 2}, "list": [1, 2]});
        merge_values(&mut target, json!({"nested": {"y": 3}, "list": [9], "b": true}));

        assert_eq!(
            target,
            json!({"a": 1, "nested": {"x": 1, "y": 3}, "list": [9], "b": true})
        );
    }
}

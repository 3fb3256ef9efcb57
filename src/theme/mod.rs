pub mod types;
pub mod merge;

use std::path::Path;

use log::debug;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::config::load_document;
use crate::utils::error::{BoxResult, IndexerError};

pub use merge::{build_theme_config, MergeOptions};
pub use types::ThemeConfig;

/// Load a theme configuration from a YAML, TOML or JSON file.
///
/// The known sections are checked against [`ThemeConfig`]; the document is
/// returned as written so key order and unknown keys survive the merge.
pub fn load_theme_config(path: &Path) -> BoxResult<Map<String, Value>> {
    let value = load_document(path)?;
    let theme = ThemeConfig::deserialize(&value).map_err(|e| {
        IndexerError::Config(format!("Invalid theme configuration {}: {}", path.display(), e))
    })?;
    debug!(
        "Theme author {:?}, {} friend link(s), comments {}",
        theme.author,
        theme.friend.len(),
        if theme.comment.is_some() { "on" } else { "off" }
    );

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(IndexerError::Config(format!(
            "Theme configuration {} is not a mapping", path.display()
        )).into()),
    }
}

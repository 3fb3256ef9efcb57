use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::defaults;
use crate::front_matter::ExcerptOptions;
use crate::history::DateFormats;

/// Indexer configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IndexerConfig {
    /// Root directory scanned for markdown files
    #[serde(default = "defaults::default_source")]
    pub source: PathBuf,

    /// Glob pattern, relative to `source`, selecting article files
    #[serde(default = "defaults::default_pattern")]
    pub pattern: String,

    /// Glob patterns or directory names to skip
    #[serde(default = "defaults::default_exclude")]
    pub exclude: Vec<String>,

    /// Routes of structural pages that are not articles
    #[serde(default = "defaults::default_reserved_paths")]
    pub reserved_paths: Vec<String>,

    /// Cover image used when an article sets none
    #[serde(default = "defaults::default_cover")]
    pub default_cover: String,

    /// Description budget in characters
    #[serde(default = "defaults::default_description_length")]
    pub description_length: usize,

    /// Marker appended to descriptions
    #[serde(default = "defaults::default_ellipsis")]
    pub ellipsis: String,

    /// Append the marker even to descriptions that were not cut
    #[serde(default = "defaults::default_true")]
    pub always_append_ellipsis: bool,

    /// chrono layout for `date` and `updateTime`
    #[serde(default = "defaults::default_date_format")]
    pub date_format: String,

    /// chrono layout for `month`
    #[serde(default = "defaults::default_month_format")]
    pub month_format: String,

    /// chrono layout for `day`
    #[serde(default = "defaults::default_day_format")]
    pub day_format: String,

    /// Version-control executable
    #[serde(default = "defaults::default_git_binary")]
    pub git_binary: String,

    /// Per-file limit for the history query
    #[serde(default = "defaults::default_git_timeout_ms")]
    pub git_timeout_ms: u64,

    /// Process files on the rayon thread pool
    #[serde(default)]
    pub parallel: bool,

    /// Also emit `top` next to `sticky` in the theme output
    #[serde(default)]
    pub legacy_top_alias: bool,
}

impl Default for IndexerConfig {
    fn default() -> Self {
        IndexerConfig {
            source: defaults::default_source(),
            pattern: defaults::default_pattern(),
            exclude: defaults::default_exclude(),
            reserved_paths: defaults::default_reserved_paths(),
            default_cover: defaults::default_cover(),
            description_length: defaults::default_description_length(),
            ellipsis: defaults::default_ellipsis(),
            always_append_ellipsis: true,
            date_format: defaults::default_date_format(),
            month_format: defaults::default_month_format(),
            day_format: defaults::default_day_format(),
            git_binary: defaults::default_git_binary(),
            git_timeout_ms: defaults::default_git_timeout_ms(),
            parallel: false,
            legacy_top_alias: false,
        }
    }
}

impl IndexerConfig {
    pub fn excerpt_options(&self) -> ExcerptOptions {
        ExcerptOptions {
            length: self.description_length,
            ellipsis: self.ellipsis.clone(),
            always_append_ellipsis: self.always_append_ellipsis,
        }
    }

    pub fn date_formats(&self) -> DateFormats {
        DateFormats {
            date: self.date_format.clone(),
            month: self.month_format.clone(),
            day: self.day_format.clone(),
        }
    }

    pub fn git_timeout(&self) -> Duration {
        Duration::from_millis(self.git_timeout_ms)
    }
}

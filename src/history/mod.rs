//! Version-control history lookup for article dates.
//!
//! The indexer only needs "the commit timestamps of this file, oldest first".
//! [`HistoryResolver`] hides where they come from so the index can be built
//! against a real repository ([`GitHistory`]) or without one ([`NoHistory`]).

pub mod git;
pub mod dates;

use std::fmt;
use std::path::Path;
use std::time::Duration;

use chrono::{DateTime, FixedOffset};

pub use dates::{resolve_dates, ArticleDates, DateFormats};
pub use git::GitHistory;

/// Why a history lookup produced no timestamps
#[derive(Debug)]
pub enum HistoryError {
    /// The command could not be started
    Spawn(std::io::Error),
    /// The command ran but exited unsuccessfully
    Exit(String),
    /// The command did not finish in time and was killed
    Timeout(Duration),
    /// The command succeeded but reported no commits (untracked file)
    Empty,
    /// A line of output was not a timestamp
    Parse(String),
    /// Lookup disabled
    Disabled,
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryError::Spawn(err) => write!(f, "failed to run history command: {}", err),
            HistoryError::Exit(status) => write!(f, "history command failed: {}", status),
            HistoryError::Timeout(limit) => {
                write!(f, "history command timed out after {} ms", limit.as_millis())
            }
            HistoryError::Empty => write!(f, "no commits found"),
            HistoryError::Parse(line) => write!(f, "unparseable timestamp: {:?}", line),
            HistoryError::Disabled => write!(f, "history lookup disabled"),
        }
    }
}

impl std::error::Error for HistoryError {}

/// Source of per-file commit timestamps
pub trait HistoryResolver: Send + Sync {
    /// Commit timestamps touching `path`, oldest first
    fn resolve_history(&self, path: &Path) -> Result<Vec<DateTime<FixedOffset>>, HistoryError>;
}

/// Resolver that never finds history, so every article falls back to "now"
#[derive(Debug, Default, Clone, Copy)]
pub struct NoHistory;

impl HistoryResolver for NoHistory {
    fn resolve_history(&self, _path: &Path) -> Result<Vec<DateTime<FixedOffset>>, HistoryError> {
        Err(HistoryError::Disabled)
    }
}

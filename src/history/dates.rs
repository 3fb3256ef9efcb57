use std::path::Path;

use chrono::{DateTime, Local};
use log::warn;

use crate::history::HistoryResolver;

/// Publish and last-update instants of one article
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticleDates {
    pub published: DateTime<Local>,
    pub updated: DateTime<Local>,
}

impl ArticleDates {
    /// Both dates set to the same instant
    pub fn at(instant: DateTime<Local>) -> Self {
        ArticleDates {
            published: instant,
            updated: instant,
        }
    }

    /// Render with the configured layouts
    pub fn format(&self, formats: &DateFormats) -> FormattedDates {
        FormattedDates {
            date: self.published.format(&formats.date).to_string(),
            update_time: self.updated.format(&formats.date).to_string(),
            month: self.published.format(&formats.month).to_string(),
            day: self.published.format(&formats.day).to_string(),
        }
    }
}

/// chrono format strings for the date fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormats {
    pub date: String,
    pub month: String,
    pub day: String,
}

impl Default for DateFormats {
    fn default() -> Self {
        DateFormats {
            date: "%Y-%m-%d %H:%M:%S".to_string(),
            month: "%Y-%m".to_string(),
            day: "%Y-%m-%d".to_string(),
        }
    }
}

/// Date strings as they appear on an article record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedDates {
    pub date: String,
    pub update_time: String,
    pub month: String,
    pub day: String,
}

/// Resolve publish/update dates for `path`.
///
/// The first commit is the publish date and the last one the update date.
/// Any lookup failure falls back to the current time for both.
pub fn resolve_dates(resolver: &dyn HistoryResolver, path: &Path) -> ArticleDates {
    match resolver.resolve_history(path) {
        Ok(history) => {
            let (Some(first), Some(last)) = (history.first(), history.last()) else {
                warn!("No history for {}, using current time", path.display());
                return ArticleDates::at(Local::now());
            };
            let published = first.with_timezone(&Local);
            let updated = last.with_timezone(&Local).max(published);
            ArticleDates { published, updated }
        }
        Err(e) => {
            warn!("Could not read history of {} ({}), using current time", path.display(), e);
            ArticleDates::at(Local::now())
        }
    }
}

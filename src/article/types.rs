use chrono::{DateTime, Local};
use serde::Serialize;

use crate::history::{ArticleDates, DateFormats};

/// One indexed article, serialized with the field names the theme reads
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleRecord {
    /// Site route, e.g. `/posts/hello`
    pub path: String,
    pub title: String,
    pub description: String,
    pub cover: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sticky: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    pub date: String,
    pub update_time: String,
    pub month: String,
    pub day: String,
    /// Instant behind `date`, used for ordering
    #[serde(skip)]
    pub published: DateTime<Local>,
}

impl ArticleRecord {
    /// Assemble a record from extracted text fields and resolved dates
    pub fn new(path: String, info: ArticleInfo, dates: ArticleDates, formats: &DateFormats) -> Self {
        let formatted = dates.format(formats);
        ArticleRecord {
            path,
            title: info.title,
            description: info.description,
            cover: info.cover,
            sticky: info.sticky,
            author: info.author,
            tags: info.tags,
            date: formatted.date,
            update_time: formatted.update_time,
            month: formatted.month,
            day: formatted.day,
            published: dates.published,
        }
    }
}

/// Fields extracted from a single markdown file's text
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArticleInfo {
    pub title: String,
    pub description: String,
    pub cover: String,
    pub sticky: Option<i64>,
    pub author: Option<String>,
    pub tags: Vec<String>,
}

//! Builds the article list for a source tree.
//!
//! Every run reads all files again; there is no cached index.

pub mod discover;

use std::path::Path;

use log::{debug, info, warn};
use rayon::prelude::*;

use crate::article::{get_article_info, ArticleRecord};
use crate::config::IndexerConfig;
use crate::history::{resolve_dates, HistoryResolver};
use crate::utils::error::BoxResult;
use crate::utils::fs;
use crate::utils::path::route_for;

pub use discover::find_markdown_files;

/// Index every article under `config.source`, newest first.
///
/// Files that cannot be read are skipped. Reserved routes are dropped.
pub fn build_index(config: &IndexerConfig, resolver: &dyn HistoryResolver) -> BoxResult<Vec<ArticleRecord>> {
    let files = find_markdown_files(config)?;
    info!("Indexing {} markdown file(s)...", files.len());

    let records: Vec<ArticleRecord> = if config.parallel {
        files
            .par_iter()
            .filter_map(|file| index_file(config, resolver, file))
            .collect()
    } else {
        files
            .iter()
            .filter_map(|file| index_file(config, resolver, file))
            .collect()
    };

    let mut articles = filter_reserved(records, &config.reserved_paths);
    sort_by_date(&mut articles);

    info!("Indexed {} article(s)", articles.len());
    Ok(articles)
}

/// Build one record, or `None` when the file cannot be read
fn index_file(config: &IndexerConfig, resolver: &dyn HistoryResolver, file: &Path) -> Option<ArticleRecord> {
    let text = match fs::read_file(file) {
        Ok(text) => text,
        Err(e) => {
            warn!("Skipping {}: {}", file.display(), e);
            return None;
        }
    };

    let route = route_for(file, &config.source);
    let info = get_article_info(&text, &config.default_cover, &config.excerpt_options());
    let dates = resolve_dates(resolver, file);
    debug!("{} -> {} ({:?})", file.display(), route, info.title);

    Some(ArticleRecord::new(route, info, dates, &config.date_formats()))
}

/// Drop records whose route is one of the reserved pages
pub fn filter_reserved(records: Vec<ArticleRecord>, reserved: &[String]) -> Vec<ArticleRecord> {
    records
        .into_iter()
        .filter(|record| {
            let keep = !reserved.iter().any(|path| path == &record.path);
            if !keep {
                debug!("Skipping reserved page {}", record.path);
            }
            keep
        })
        .collect()
}

/// Newest first; equal dates keep their enumeration order
pub fn sort_by_date(records: &mut [ArticleRecord]) {
    records.sort_by(|a, b| b.published.cmp(&a.published));
}

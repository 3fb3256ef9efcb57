use log::warn;
use serde_json::{Map, Value};

use crate::article::ArticleRecord;
use crate::utils::error::BoxResult;

/// Key the article list is published under
pub const ARTICLE_KEY: &str = "article";

/// Options applied while merging
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeOptions {
    /// Mirror `sticky` as `top` on every article
    pub legacy_top_alias: bool,
}

/// Merge the article list into the theme configuration.
///
/// The result holds `article` followed by every theme key in source order.
/// A theme that defines `article` itself overrides the generated list.
pub fn build_theme_config(
    theme: &Map<String, Value>,
    articles: &[ArticleRecord],
    options: MergeOptions,
) -> BoxResult<Value> {
    let mut merged = Map::new();
    merged.insert(ARTICLE_KEY.to_string(), articles_value(articles, options)?);

    for (key, value) in theme {
        if key == ARTICLE_KEY {
            warn!("Theme config defines '{}', replacing the generated article list", ARTICLE_KEY);
        }
        merged.insert(key.clone(), value.clone());
    }

    Ok(Value::Object(merged))
}

/// Serialize the article list, adding deprecated aliases when asked
pub fn articles_value(articles: &[ArticleRecord], options: MergeOptions) -> BoxResult<Value> {
    let mut list = Vec::with_capacity(articles.len());
    for article in articles {
        let mut value = serde_json::to_value(article)?;
        if options.legacy_top_alias {
            if let (Some(sticky), Value::Object(map)) = (article.sticky, &mut value) {
                map.insert("top".to_string(), Value::from(sticky));
            }
        }
        list.push(value);
    }
    Ok(Value::Array(list))
}

use crate::article::types::ArticleInfo;
use crate::front_matter::{
    extract_description, extract_field, extract_sticky, extract_tags, extract_title,
    split_front_matter, ExcerptOptions,
};
use crate::front_matter::fields::unquote;

/// Extract article fields from raw markdown text
pub fn get_article_info(text: &str, default_cover: &str, excerpt: &ExcerptOptions) -> ArticleInfo {
    let split = split_front_matter(text);

    let cover = extract_field(&split.front_matter, "cover:")
        .map(|cover| unquote(&cover).to_string())
        .unwrap_or_else(|| default_cover.to_string());

    ArticleInfo {
        title: extract_title(&split.body),
        description: extract_description(&split.body, excerpt),
        cover,
        sticky: extract_sticky(&split.front_matter),
        author: extract_field(&split.front_matter, "author:").map(|a| unquote(&a).to_string()),
        tags: extract_tags(&split.front_matter),
    }
}

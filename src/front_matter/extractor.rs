use lazy_static::lazy_static;
use regex::Regex;

use crate::front_matter::strip::{apply_steps, EXCERPT_STEPS, MARKUP_STEPS};

lazy_static! {
    static ref H1_SECTION: Regex = Regex::new(r"(?m)^# ([\s\S]+)").unwrap();
}

/// How the description excerpt is cut and marked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExcerptOptions {
    /// Character budget for the excerpt
    pub length: usize,
    /// Marker appended to the excerpt
    pub ellipsis: String,
    /// Append the marker even when nothing was cut
    pub always_append_ellipsis: bool,
}

impl Default for ExcerptOptions {
    fn default() -> Self {
        ExcerptOptions {
            length: 120,
            ellipsis: "...".to_string(),
            always_append_ellipsis: true,
        }
    }
}

/// Extract the title from the first `# ` heading line
pub fn extract_title(body: &str) -> String {
    body.lines()
        .find(|line| line.starts_with("# "))
        .map(|line| line[2..].trim().to_string())
        .unwrap_or_default()
}

/// Build a plain-text excerpt from the first level-1 heading onwards.
///
/// Returns an empty string when the body has no level-1 heading.
pub fn extract_description(body: &str, options: &ExcerptOptions) -> String {
    let Some(section) = H1_SECTION.captures(body).and_then(|c| c.get(1)) else {
        return String::new();
    };

    let stripped = apply_steps(section.as_str(), &MARKUP_STEPS);

    // The first non-blank line is the heading text itself
    let lines: Vec<&str> = stripped
        .split('\n')
        .filter(|line| !line.is_empty())
        .skip(1)
        .collect();

    let excerpt = apply_steps(&lines.join("\n"), &EXCERPT_STEPS);
    truncate(&excerpt, options)
}

/// Cut `text` to the character budget and append the ellipsis
fn truncate(text: &str, options: &ExcerptOptions) -> String {
    let truncated = text.chars().count() > options.length;
    let mut excerpt: String = text.chars().take(options.length).collect();

    if truncated || options.always_append_ellipsis {
        excerpt.push_str(&options.ellipsis);
    }
    excerpt
}

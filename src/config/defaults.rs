use std::path::PathBuf;

/// Default source directory
pub fn default_source() -> PathBuf {
    PathBuf::from(".")
}

/// Default article glob
pub fn default_pattern() -> String {
    "**/*.md".to_string()
}

/// Default excluded directories
pub fn default_exclude() -> Vec<String> {
    vec!["node_modules".to_string()]
}

/// Home, about and archive pages
pub fn default_reserved_paths() -> Vec<String> {
    vec![
        "/index".to_string(),
        "/about".to_string(),
        "/archive".to_string(),
    ]
}

/// Default cover image
pub fn default_cover() -> String {
    "https://cdn.pixabay.com/photo/2014/04/14/20/11/pink-324175_640.jpg".to_string()
}

pub fn default_description_length() -> usize {
    120
}

pub fn default_ellipsis() -> String {
    "...".to_string()
}

pub fn default_true() -> bool {
    true
}

pub fn default_date_format() -> String {
    "%Y-%m-%d %H:%M:%S".to_string()
}

pub fn default_month_format() -> String {
    "%Y-%m".to_string()
}

pub fn default_day_format() -> String {
    "%Y-%m-%d".to_string()
}

pub fn default_git_binary() -> String {
    "git".to_string()
}

/// Per-file history query limit in milliseconds
pub fn default_git_timeout_ms() -> u64 {
    5000
}

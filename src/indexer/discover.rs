use std::path::{Component, Path, PathBuf};

use glob::{glob_with, MatchOptions, Pattern};
use log::{debug, warn};

use crate::config::IndexerConfig;
use crate::utils::error::{BoxResult, IndexerError};
use crate::utils::path::make_relative;

/// Find all article candidates under the source root, in glob order
pub fn find_markdown_files(config: &IndexerConfig) -> BoxResult<Vec<PathBuf>> {
    let excludes = compile_excludes(&config.exclude)?;
    // The root itself may contain glob metacharacters
    let root = Pattern::escape(&config.source.to_string_lossy());
    let full_pattern = Path::new(&root).join(&config.pattern).to_string_lossy().to_string();
    let options = MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: false,
    };

    let mut files = Vec::new();
    let entries = glob_with(&full_pattern, options)
        .map_err(|e| IndexerError::Glob(format!("{}: {}", full_pattern, e)))?;

    for entry in entries {
        match entry {
            Ok(path) => {
                if !path.is_file() {
                    continue;
                }
                let relative = make_relative(&path, &config.source).unwrap_or_else(|| path.clone());
                if is_hidden(&relative) {
                    debug!("Skipping hidden {}", path.display());
                    continue;
                }
                if is_excluded(&relative, &excludes) {
                    debug!("Excluding {}", path.display());
                    continue;
                }
                files.push(path);
            }
            Err(e) => warn!("Error matching pattern {}: {}", full_pattern, e),
        }
    }

    debug!("Found {} markdown file(s) under {}", files.len(), config.source.display());
    Ok(files)
}

fn compile_excludes(excludes: &[String]) -> BoxResult<Vec<Pattern>> {
    let mut patterns = Vec::with_capacity(excludes.len());
    for exclude in excludes {
        patterns.push(Pattern::new(exclude).map_err(IndexerError::from)?);
    }
    Ok(patterns)
}

/// Dot-prefixed files and directories below the root (`.vitepress`, `.git`)
/// are never articles
fn is_hidden(relative: &Path) -> bool {
    relative.components().any(|component| match component {
        Component::Normal(name) => name.to_string_lossy().starts_with('.'),
        _ => false,
    })
}

/// A path is excluded when the whole relative path or any one of its
/// directory components matches an exclude pattern
fn is_excluded(relative: &Path, excludes: &[Pattern]) -> bool {
    if excludes.iter().any(|p| p.matches_path(relative)) {
        return true;
    }

    let parent = relative.parent().unwrap_or(Path::new(""));
    parent.components().any(|component| match component {
        Component::Normal(name) => {
            let name = name.to_string_lossy();
            excludes.iter().any(|p| p.matches(&name))
        }
        _ => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "# x").unwrap();
    }

    fn relative_names(config: &IndexerConfig) -> Vec<String> {
        find_markdown_files(config)
            .unwrap()
            .iter()
            .map(|p| {
                make_relative(p, &config.source)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect()
    }

    #[test]
    fn test_finds_nested_markdown_and_skips_node_modules() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "index.md");
        touch(dir.path(), "posts/a.md");
        touch(dir.path(), "posts/deep/b.md");
        touch(dir.path(), "node_modules/pkg/README.md");
        touch(dir.path(), "posts/notes.txt");

        let config = IndexerConfig {
            source: dir.path().to_path_buf(),
            ..IndexerConfig::default()
        };
        let mut names = relative_names(&config);
        names.sort();

        assert_eq!(names, vec!["index.md", "posts/a.md", "posts/deep/b.md"]);
    }

    #[test]
    fn test_exclude_glob_on_relative_path() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "drafts/wip.md");
        touch(dir.path(), "posts/done.md");

        let config = IndexerConfig {
            source: dir.path().to_path_buf(),
            exclude: vec!["drafts/*".to_string()],
            ..IndexerConfig::default()
        };
        assert_eq!(relative_names(&config), vec!["posts/done.md"]);
    }

    #[test]
    fn test_skips_dot_directories_and_files() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "post.md");
        touch(dir.path(), ".vitepress/theme/README.md");
        touch(dir.path(), "posts/.draft.md");

        let config = IndexerConfig {
            source: dir.path().to_path_buf(),
            ..IndexerConfig::default()
        };
        assert_eq!(relative_names(&config), vec!["post.md"]);
    }

    #[test]
    fn test_is_hidden() {
        assert!(is_hidden(Path::new(".vitepress/config.md")));
        assert!(is_hidden(Path::new("posts/.draft.md")));
        assert!(!is_hidden(Path::new("posts/v1.2/notes.md")));
    }

    #[test]
    fn test_is_excluded_components() {
        let excludes = compile_excludes(&["node_modules".to_string()]).unwrap();
        assert!(is_excluded(Path::new("a/node_modules/b.md"), &excludes));
        assert!(!is_excluded(Path::new("a/node_modules.md"), &excludes));
    }
}

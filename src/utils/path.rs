use std::path::{Component, Path, PathBuf};

/// Normalize a path, resolving ".." and "." components
pub fn normalize_path<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    let mut result = PathBuf::new();

    for component in path.components() {
        match component {
            Component::ParentDir => {
                // Go up one level unless we're at the root
                if !result.as_os_str().is_empty() {
                    result.pop();
                }
            }
            Component::CurDir => {}
            _ => result.push(component),
        }
    }

    result
}

/// Make a path relative to another path
pub fn make_relative<P: AsRef<Path>, B: AsRef<Path>>(path: P, base: B) -> Option<PathBuf> {
    let path = normalize_path(path);
    let base = normalize_path(base);

    if base.as_os_str().is_empty() {
        return Some(path);
    }

    path.strip_prefix(&base).ok().map(Path::to_path_buf)
}

/// Site route for a markdown file: relative to the source root, extension
/// removed, `/`-separated, with a leading slash.
pub fn route_for<P: AsRef<Path>, B: AsRef<Path>>(file: P, source: B) -> String {
    let file = file.as_ref();
    let relative = make_relative(file, source).unwrap_or_else(|| normalize_path(file));
    let without_ext = relative.with_extension("");

    let segments: Vec<String> = without_ext
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    format!("/{}", segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("./docs/../docs/a.md"), PathBuf::from("docs/a.md"));
    }

    #[test]
    fn test_make_relative() {
        assert_eq!(
            make_relative("docs/posts/a.md", "./docs"),
            Some(PathBuf::from("posts/a.md"))
        );
        assert_eq!(make_relative("other/a.md", "docs"), None);
        assert_eq!(make_relative("a.md", "."), Some(PathBuf::from("a.md")));
    }

    #[test]
    fn test_route_for() {
        assert_eq!(route_for("docs/about.md", "docs"), "/about");
        assert_eq!(route_for("docs/posts/rust/intro.md", "docs"), "/posts/rust/intro");
        assert_eq!(route_for("index.md", "."), "/index");
    }

    #[test]
    fn test_route_for_keeps_inner_dots() {
        assert_eq!(route_for("docs/v1.2-notes.md", "docs"), "/v1.2-notes");
    }
}

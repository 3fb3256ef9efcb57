use std::path::PathBuf;

use log::debug;
use serde_json::Map;

use crate::cli::commands::common::{emit_json, load_indexer_config, make_resolver, GlobalOptions};
use crate::indexer;
use crate::theme::{build_theme_config, load_theme_config, MergeOptions};
use crate::utils::error::BoxResult;

/// Handle the theme command
pub fn handle_theme_command(
    options: &GlobalOptions,
    theme_file: Option<&PathBuf>,
    pretty: bool,
    output: Option<&PathBuf>,
) -> BoxResult<()> {
    let config = load_indexer_config(options)?;

    let theme = match theme_file {
        Some(path) => {
            debug!("Loading theme configuration from {}", path.display());
            load_theme_config(path)?
        }
        None => Map::new(),
    };

    let resolver = make_resolver(&config, options.no_git);
    let articles = indexer::build_index(&config, resolver.as_ref())?;

    let merged = build_theme_config(
        &theme,
        &articles,
        MergeOptions {
            legacy_top_alias: config.legacy_top_alias,
        },
    )?;

    emit_json(&merged, pretty, output.map(|p| p.as_path()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_command_writes_merged_config() {
        let dir = tempfile::tempdir().unwrap();
        let docs = dir.path().join("docs");
        std::fs::create_dir_all(docs.join("posts")).unwrap();
        std::fs::write(docs.join("index.md"), "# Home").unwrap();
        std::fs::write(docs.join("posts/hello.md"), "---\ntop: 1\n---\n# Hello\nworld").unwrap();

        let theme_file = dir.path().join("theme.json");
        std::fs::write(&theme_file, r#"{"author": "A"}"#).unwrap();
        let cfg = dir.path().join("indexer.toml");
        std::fs::write(&cfg, "legacy_top_alias = true\n").unwrap();
        let out = dir.path().join("theme.out.json");

        let config_files = vec![cfg];
        let options = GlobalOptions {
            source: Some(&docs),
            config_files: &config_files,
            no_git: true,
        };
        handle_theme_command(&options, Some(&theme_file), true, Some(&out)).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(written["author"], "A");
        let articles = written["article"].as_array().unwrap();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0]["path"], "/posts/hello");
        assert_eq!(articles[0]["sticky"], 1);
        assert_eq!(articles[0]["top"], 1);
    }
}

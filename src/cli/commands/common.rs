use std::path::{Path, PathBuf};

use log::info;
use serde::Serialize;

use crate::config::{self, IndexerConfig};
use crate::history::{GitHistory, HistoryResolver, NoHistory};
use crate::utils::error::BoxResult;
use crate::utils::fs;

/// Global options every command needs
pub struct GlobalOptions<'a> {
    pub source: Option<&'a PathBuf>,
    pub config_files: &'a [PathBuf],
    pub no_git: bool,
}

/// Load the indexer configuration, letting `--source` override the file
pub fn load_indexer_config(options: &GlobalOptions) -> BoxResult<IndexerConfig> {
    let source_dir = options.source.cloned().unwrap_or_else(|| PathBuf::from("."));
    let config_files = if options.config_files.is_empty() {
        None
    } else {
        Some(options.config_files.to_vec())
    };

    config::load_config(&source_dir, config_files, options.source.map(PathBuf::as_path))
}

/// History resolver for this run
pub fn make_resolver(config: &IndexerConfig, no_git: bool) -> Box<dyn HistoryResolver> {
    if no_git {
        info!("Git history disabled, dating articles with the current time");
        Box::new(NoHistory)
    } else {
        Box::new(GitHistory::new(config.git_binary.clone(), config.git_timeout()))
    }
}

/// Serialize `value` as JSON to `output`, or stdout when none is given
pub fn emit_json<T: Serialize>(value: &T, pretty: bool, output: Option<&Path>) -> BoxResult<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };

    match output {
        Some(path) => {
            fs::write_file(path, &json)?;
            info!("Wrote {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}

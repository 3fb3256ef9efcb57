use std::path::PathBuf;

use crate::cli::commands::common::{emit_json, load_indexer_config, make_resolver, GlobalOptions};
use crate::indexer;
use crate::theme::merge::{articles_value, MergeOptions};
use crate::utils::error::BoxResult;

/// Handle the index command
pub fn handle_index_command(options: &GlobalOptions, pretty: bool, output: Option<&PathBuf>) -> BoxResult<()> {
    let config = load_indexer_config(options)?;
    let resolver = make_resolver(&config, options.no_git);

    let articles = indexer::build_index(&config, resolver.as_ref())?;
    let merge_options = MergeOptions {
        legacy_top_alias: config.legacy_top_alias,
    };

    emit_json(&articles_value(&articles, merge_options)?, pretty, output.map(|p| p.as_path()))
}

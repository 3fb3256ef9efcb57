pub mod types;
pub mod commands;
pub mod logging;

use clap::Parser;

use crate::utils::error::BoxResult;

/// Run the command-line interface
pub fn run() {
    let cli = types::Cli::parse();

    // Initialize logging system
    logging::init_logging(logging::level_for(cli.debug, cli.quiet));

    // Configure backtrace
    logging::configure_backtrace(cli.trace);

    if let Err(e) = dispatch(&cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn dispatch(cli: &types::Cli) -> BoxResult<()> {
    let options = commands::GlobalOptions {
        source: cli.source.as_ref(),
        config_files: &cli.config,
        no_git: cli.no_git,
    };

    match &cli.command {
        Some(types::Commands::Index { pretty, output }) => {
            commands::handle_index_command(&options, *pretty, output.as_ref())
        }
        Some(types::Commands::Theme { theme, pretty, output }) => {
            commands::handle_theme_command(&options, theme.as_ref(), *pretty, output.as_ref())
        }
        Some(types::Commands::Config { action }) => {
            commands::handle_config_command(&options, action)
        }
        // Default to the index command if none provided
        None => commands::handle_index_command(&options, false, None),
    }
}

// Module declarations
mod article;
mod cli;
mod config;
mod front_matter;
mod history;
mod indexer;
mod theme;
mod utils;

fn main() {
    // Run the CLI
    cli::run();
}

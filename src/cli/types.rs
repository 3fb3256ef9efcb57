use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI parser structure
#[derive(Parser)]
#[command(name = "blog-indexer")]
#[command(about = "Index markdown articles and merge them into the blog theme config", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Source directory (defaults to ./)
    #[arg(short, long, value_name = "DIR", global = true)]
    pub source: Option<PathBuf>,

    /// Indexer configuration file, may be repeated (later files win)
    #[arg(long, value_name = "CONFIG_FILE", global = true)]
    pub config: Vec<PathBuf>,

    /// Skip git history and date every article with the current time
    #[arg(long, default_value_t = false, global = true)]
    pub no_git: bool,

    /// Show the full backtrace when an error occurs
    #[arg(short, long, default_value_t = false, global = true)]
    pub trace: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false, global = true)]
    pub debug: bool,

    /// Only log errors
    #[arg(short, long, default_value_t = false, global = true)]
    pub quiet: bool,
}

/// Subcommands for the CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Print the article list as JSON
    #[command(alias = "i")]
    Index {
        /// Pretty-print the JSON
        #[arg(short, long, default_value_t = false)]
        pretty: bool,

        /// Write to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Print the theme configuration with the article list merged in
    #[command(alias = "t")]
    Theme {
        /// Theme configuration file (YAML, TOML or JSON)
        #[arg(long, value_name = "FILE")]
        theme: Option<PathBuf>,

        /// Pretty-print the JSON
        #[arg(short, long, default_value_t = false)]
        pretty: bool,

        /// Write to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Inspect the effective indexer configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands
#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print one value, using dots for nesting
    Get {
        key: String,
    },
    /// Print the whole configuration as YAML
    List {},
}

mod common;
mod index;
mod theme;
mod config;

pub use common::GlobalOptions;
pub use index::handle_index_command;
pub use theme::handle_theme_command;
pub use config::handle_config_command;

pub mod types;
pub mod info;

pub use types::ArticleRecord;
pub use info::get_article_info;

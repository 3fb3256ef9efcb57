pub mod splitter;
pub mod fields;
pub mod strip;
pub mod extractor;

// Re-export the most common items for convenience
pub use splitter::split_front_matter;
pub use fields::{extract_field, extract_sticky, extract_tags};
pub use extractor::{extract_description, extract_title, ExcerptOptions};

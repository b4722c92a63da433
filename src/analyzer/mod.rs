//! Tag ranking and version extraction

pub mod tag_collector;
pub mod version_extractor;

pub use tag_collector::{collect_tags, TagCollector, DEFAULT_TAG_NAMESPACE};
pub use version_extractor::{extract_version, VersionExtractor};

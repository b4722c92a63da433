//! Domain logic - pure tag and version rules independent of git operations

pub mod pattern;
pub mod tag;

pub use pattern::{is_semver, VersionPattern, DEFAULT_PATTERN};
pub use tag::{bare_tag_name, Annotation, CommitInfo, TagRecord, TagTarget};

//! Pure formatting functions for UI output.
//!
//! Functions here build strings only; printing lives in the parent module.

use crate::domain::TagRecord;

/// One line of the tag listing: name, commit time, short id, author and an
/// `annotated` marker when the tag carries its own object.
pub fn format_tag_line(name: &str, record: &TagRecord, name_width: usize) -> String {
    let kind = if record.is_annotated() {
        "annotated"
    } else {
        "lightweight"
    };

    format!(
        "{:<width$}  {}  {}  {:<11}  {}",
        name,
        record.commit_time.format("%Y-%m-%d %H:%M:%S"),
        record.short_id(),
        kind,
        record.author,
        width = name_width
    )
}

/// Width of the widest tag name, used to align the listing
pub fn name_column_width(tags: &[(String, TagRecord)]) -> usize {
    tags.iter()
        .map(|(name, _)| name.chars().count())
        .max()
        .unwrap_or(0)
}

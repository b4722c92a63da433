//! User-facing output.
//!
//! - `formatter` - Pure formatting functions
//! - This module - Printing to stdout/stderr with `console` styling

use console::style;

use crate::domain::TagRecord;

pub mod formatter;

pub use formatter::{format_tag_line, name_column_width};

/// Print an error message to stderr.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Print the derived version, bare, so the output can be captured by scripts.
pub fn display_version(version: &str) {
    println!("{}", version);
}

/// Print every tag, newest first.
pub fn display_tags(tags: &[(String, TagRecord)]) {
    let width = name_column_width(tags);
    for (i, (name, record)) in tags.iter().enumerate() {
        let line = format_tag_line(name, record, width);
        if i == 0 {
            println!("{}", style(line).green());
        } else {
            println!("{}", line);
        }
    }
}

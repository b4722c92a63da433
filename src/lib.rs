pub mod analyzer;
pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod ui;
pub mod version_file;

pub use analyzer::{collect_tags, extract_version};
pub use error::{Result, TagVersionError};

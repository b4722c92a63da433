use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::analyzer::DEFAULT_TAG_NAMESPACE;
use crate::domain::DEFAULT_PATTERN;
use crate::error::{Result, TagVersionError};

/// File name looked up in the current directory
pub const CONFIG_FILE_NAME: &str = "tagversion.toml";

/// Represents the complete configuration for git-tag-version.
///
/// Every field has a default, so an empty file is a valid configuration.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// Regular expression whose first group isolates the version in a tag name
    #[serde(default = "default_pattern")]
    pub pattern: String,

    /// Only references starting with this prefix are treated as tags
    #[serde(default = "default_tag_namespace")]
    pub tag_namespace: String,

    /// Search parent directories for the repository
    #[serde(default)]
    pub discover: bool,

    /// Where to cache the last version derived from git.
    ///
    /// A relative path is resolved against the repository path.
    #[serde(default)]
    pub version_file: Option<PathBuf>,
}

fn default_pattern() -> String {
    DEFAULT_PATTERN.to_string()
}

fn default_tag_namespace() -> String {
    DEFAULT_TAG_NAMESPACE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            pattern: default_pattern(),
            tag_namespace: default_tag_namespace(),
            discover: false,
            version_file: None,
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `tagversion.toml` in current directory
/// 3. `.tagversion.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let path = if let Some(path) = config_path {
        path.to_path_buf()
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        PathBuf::from(CONFIG_FILE_NAME)
    } else if let Some(config_dir) = dirs::config_dir() {
        let path = config_dir.join(format!(".{}", CONFIG_FILE_NAME));
        if path.exists() {
            path
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config_str = fs::read_to_string(&path).map_err(|e| {
        TagVersionError::config(format!("cannot read '{}': {}", path.display(), e))
    })?;

    parse_config(&config_str)
        .map_err(|e| TagVersionError::config(format!("'{}': {}", path.display(), e)))
}

/// Parse configuration from TOML text
pub fn parse_config(text: &str) -> std::result::Result<Config, toml::de::Error> {
    toml::from_str(text)
}

use regex::Regex;

use crate::boundary::BoundaryWarning;
use crate::error::Result;

/// Strips a textual prefix ("v", "Release-", "version_") and captures the
/// dotted version that follows.
pub const DEFAULT_PATTERN: &str = r"[ a-zA-Z_\-]*([\d\.]+[\-\w\.]*)";

/// Regular expression with one capturing group isolating the version part of
/// a tag name. Matching is anchored at the start of the tag only.
#[derive(Debug, Clone)]
pub struct VersionPattern {
    source: String,
    regex: Regex,
}

impl VersionPattern {
    /// Compile a version pattern
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let source = pattern.into();
        let regex = Regex::new(&format!("^(?:{})", source))?;

        Ok(VersionPattern { source, regex })
    }

    /// The pattern as written, without the start anchor
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Extract the version part of `tag`.
    ///
    /// Returns the first capture group, or a warning describing why the tag
    /// could not be reduced.
    pub fn extract<'t>(&self, tag: &'t str) -> std::result::Result<&'t str, BoundaryWarning> {
        let captures = self
            .regex
            .captures(tag)
            .ok_or_else(|| BoundaryWarning::PatternMismatch {
                tag: tag.to_string(),
                pattern: self.source.clone(),
            })?;

        match captures.get(1) {
            Some(group) if !group.as_str().is_empty() => Ok(group.as_str()),
            _ => Err(BoundaryWarning::EmptyCapture {
                tag: tag.to_string(),
                pattern: self.source.clone(),
            }),
        }
    }
}

impl Default for VersionPattern {
    fn default() -> Self {
        VersionPattern {
            source: DEFAULT_PATTERN.to_string(),
            regex: Regex::new(&format!("^(?:{})", DEFAULT_PATTERN))
                .expect("default version pattern compiles"),
        }
    }
}

/// Whether `version` is a valid semantic version (e.g. "1.2.3-rc.1")
pub fn is_semver(version: &str) -> bool {
    semver::Version::parse(version).is_ok()
}

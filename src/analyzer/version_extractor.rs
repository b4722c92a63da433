use std::path::Path;

use crate::analyzer::tag_collector::TagCollector;
use crate::boundary::DiagnosticSink;
use crate::domain::{TagRecord, VersionPattern};
use crate::error::Result;
use crate::git::{Git2Repository, Repository};

/// Reduces the newest tag of a repository to a version string
#[derive(Debug, Clone, Default)]
pub struct VersionExtractor {
    pattern: VersionPattern,
}

impl VersionExtractor {
    /// Create an extractor using `pattern`
    pub fn new(pattern: VersionPattern) -> Self {
        VersionExtractor { pattern }
    }

    /// Apply the pattern to a single tag name.
    ///
    /// Falls back to the unmodified tag name, reporting why to `sink`.
    pub fn extract_from_tag(&self, tag: &str, sink: Option<&dyn DiagnosticSink>) -> String {
        match self.pattern.extract(tag) {
            Ok(version) => version.to_string(),
            Err(warning) => {
                if let Some(sink) = sink {
                    sink.report(&warning);
                }
                tag.to_string()
            }
        }
    }

    /// Version of the newest tag in an already ranked tag list
    pub fn extract_from_tags(
        &self,
        tags: &[(String, TagRecord)],
        sink: Option<&dyn DiagnosticSink>,
    ) -> Option<String> {
        tags.first().map(|(name, _)| self.extract_from_tag(name, sink))
    }

    /// Collect tags from `repo` and extract the newest one's version.
    ///
    /// `Ok(None)` when the repository has no resolvable tags.
    pub fn current_version<R: Repository>(
        &self,
        repo: &R,
        collector: &TagCollector,
        sink: Option<&dyn DiagnosticSink>,
    ) -> Result<Option<String>> {
        let tags = collector.collect(repo)?;
        Ok(self.extract_from_tags(&tags, sink))
    }
}

/// Version derived from the newest tag of the repository at `path`.
///
/// Returns `Ok(None)` for a repository without tags and
/// [crate::error::TagVersionError::RepositoryNotFound] when `path` is not a
/// repository.
pub fn extract_version<P: AsRef<Path>>(
    path: P,
    pattern: &VersionPattern,
    sink: Option<&dyn DiagnosticSink>,
) -> Result<Option<String>> {
    let repo = Git2Repository::open(path)?;
    VersionExtractor::new(pattern.clone()).current_version(&repo, &TagCollector::default(), sink)
}

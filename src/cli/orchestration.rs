//! Main workflow orchestration logic
//!
//! Keeps the steps between argument parsing and printing out of main.rs so
//! the workflow can be called programmatically without depending on clap.

use std::path::PathBuf;

use crate::analyzer::{TagCollector, VersionExtractor};
use crate::boundary::TracingSink;
use crate::config::Config;
use crate::domain::{is_semver, TagRecord, VersionPattern};
use crate::error::{Result, TagVersionError};
use crate::git::Git2Repository;
use crate::version_file::{resolve_with_cache, VersionFile, VersionSource};

/// Arguments for the version workflow
///
/// Options left as `None`/`false` defer to the loaded [Config].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WorkflowArgs {
    /// Repository work tree or `.git` directory
    pub repo_path: PathBuf,

    /// Overrides the configured version pattern
    pub pattern: Option<String>,

    /// Overrides the configured version file
    pub version_file: Option<PathBuf>,

    /// Search parent directories for the repository
    pub discover: bool,

    /// Report every tag rather than only the version
    pub list: bool,

    /// Fail unless the version is a valid semantic version
    pub strict: bool,
}

/// Result of a successful workflow
#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowResult {
    /// The derived version, or `None` when there is nothing to report
    Version {
        version: Option<String>,
        source: Option<VersionSource>,
    },
    /// Ranked tags, newest first
    Tags(Vec<(String, TagRecord)>),
}

fn open_repository(args: &WorkflowArgs, config: &Config) -> Result<Git2Repository> {
    if args.discover || config.discover {
        Git2Repository::discover(&args.repo_path)
    } else {
        Git2Repository::open(&args.repo_path)
    }
}

/// The version file to use, if any.
///
/// A command-line path is taken as given. A relative path from the config
/// file is relative to the repository path.
fn version_file_path(args: &WorkflowArgs, config: &Config) -> Option<PathBuf> {
    if let Some(path) = &args.version_file {
        return Some(path.clone());
    }

    config.version_file.as_ref().map(|path| {
        if path.is_relative() {
            args.repo_path.join(path)
        } else {
            path.clone()
        }
    })
}

/// Run the version workflow:
/// 1. Open the repository (released when this function returns)
/// 2. Collect and rank its tags
/// 3. Extract the newest tag's version, or return the ranked list
/// 4. Reconcile with the version file, if one is configured
pub fn run_workflow(args: &WorkflowArgs, config: &Config) -> Result<WorkflowResult> {
    let pattern = VersionPattern::new(args.pattern.as_deref().unwrap_or(&config.pattern))?;
    let collector = TagCollector::new(config.tag_namespace.clone());

    if args.list {
        let repo = open_repository(args, config)?;
        return Ok(WorkflowResult::Tags(collector.collect(&repo)?));
    }

    let extractor = VersionExtractor::new(pattern);
    let derived = open_repository(args, config)
        .and_then(|repo| extractor.current_version(&repo, &collector, Some(&TracingSink)));

    let resolved = match version_file_path(args, config) {
        Some(path) => resolve_with_cache(derived, &VersionFile::at(path))?,
        None => derived?.map(|version| (version, VersionSource::Repository)),
    };

    let (version, source) = match resolved {
        Some((version, source)) => (Some(version), Some(source)),
        None => (None, None),
    };

    if args.strict {
        if let Some(version) = version.as_deref() {
            if !is_semver(version) {
                return Err(TagVersionError::version(format!(
                    "'{}' is not a valid semantic version",
                    version
                )));
            }
        }
    }

    Ok(WorkflowResult::Version { version, source })
}

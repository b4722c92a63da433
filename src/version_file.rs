//! Cached copy of the last version derived from git.
//!
//! A source archive has no `.git` directory, so the version found while the
//! repository was still available is stored next to the sources and read back
//! when it is not.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TagVersionError};

#[derive(Debug, Serialize, Deserialize)]
struct VersionFileContents {
    version: String,
}

/// A TOML file holding `version = "..."`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionFile {
    path: PathBuf,
}

impl VersionFile {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        VersionFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The cached version, or `None` if the file does not exist
    pub fn read(&self) -> Result<Option<String>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let contents: VersionFileContents = toml::from_str(&text).map_err(|e| {
            TagVersionError::config(format!(
                "invalid version file '{}': {}",
                self.path.display(),
                e
            ))
        })?;

        Ok(Some(contents.version))
    }

    /// Replace the cached version
    pub fn write(&self, version: &str) -> Result<()> {
        let text = toml::to_string(&VersionFileContents {
            version: version.to_string(),
        })
        .map_err(|e| TagVersionError::config(format!("cannot encode version file: {}", e)))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, text)?;
        Ok(())
    }
}

/// Where a resolved version came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionSource {
    Repository,
    VersionFile,
}

/// Reconcile a version derived from git with the cache file.
///
/// `derived` is the outcome of asking the repository. A version from git
/// refreshes the file when it differs or cannot be read; no tags, or no
/// repository at all, fall back to whatever the file holds. A missing
/// repository with nothing cached is still an error.
pub fn resolve_with_cache(
    derived: Result<Option<String>>,
    cache: &VersionFile,
) -> Result<Option<(String, VersionSource)>> {
    match derived {
        Ok(Some(version)) => {
            let cached = cache.read().unwrap_or_else(|e| {
                tracing::debug!(path = %cache.path().display(), "unreadable version file, rewriting: {}", e);
                None
            });
            if cached.as_deref() != Some(version.as_str()) {
                tracing::debug!(path = %cache.path().display(), %version, "updating version file");
                cache.write(&version)?;
            }
            Ok(Some((version, VersionSource::Repository)))
        }
        Ok(None) => Ok(cache
            .read()?
            .map(|version| (version, VersionSource::VersionFile))),
        Err(e) if e.is_repository_not_found() => match cache.read()? {
            Some(version) => {
                tracing::debug!("{}; using version file", e);
                Ok(Some((version, VersionSource::VersionFile)))
            }
            None => Err(e),
        },
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn not_found() -> TagVersionError {
        TagVersionError::repository_not_found("/nowhere", git2::Error::from_str("not a repository"))
    }

    #[test]
    fn test_read_missing_file() {
        let dir = TempDir::new().unwrap();
        let cache = VersionFile::at(dir.path().join("version.toml"));
        assert_eq!(cache.read().unwrap(), None);
    }

    #[test]
    fn test_write_then_read() {
        let dir = TempDir::new().unwrap();
        let cache = VersionFile::at(dir.path().join("nested/version.toml"));
        cache.write("0.3-rc.1").unwrap();

        let text = fs::read_to_string(cache.path()).unwrap();
        assert_eq!(text.trim(), "version = \"0.3-rc.1\"");
        assert_eq!(cache.read().unwrap().as_deref(), Some("0.3-rc.1"));
    }

    #[test]
    fn test_garbage_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("version.toml");
        fs::write(&path, "not toml at all [").unwrap();
        assert!(VersionFile::at(path).read().is_err());
    }

    #[test]
    fn test_git_version_refreshes_cache() {
        let dir = TempDir::new().unwrap();
        let cache = VersionFile::at(dir.path().join("version.toml"));
        cache.write("0.1").unwrap();

        let resolved = resolve_with_cache(Ok(Some("0.2".to_string())), &cache).unwrap();
        assert_eq!(resolved, Some(("0.2".to_string(), VersionSource::Repository)));
        assert_eq!(cache.read().unwrap().as_deref(), Some("0.2"));
    }

    #[test]
    fn test_git_version_replaces_unreadable_cache() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("version.toml");
        fs::write(&path, "VERSION = \"0.1\"\n").unwrap();
        let cache = VersionFile::at(&path);
        assert!(cache.read().is_err());

        let resolved = resolve_with_cache(Ok(Some("1.2.3".to_string())), &cache).unwrap();
        assert_eq!(resolved, Some(("1.2.3".to_string(), VersionSource::Repository)));
        assert_eq!(cache.read().unwrap().as_deref(), Some("1.2.3"));
    }

    #[test]
    fn test_no_tags_uses_cache() {
        let dir = TempDir::new().unwrap();
        let cache = VersionFile::at(dir.path().join("version.toml"));
        assert_eq!(resolve_with_cache(Ok(None), &cache).unwrap(), None);

        cache.write("1.0").unwrap();
        let resolved = resolve_with_cache(Ok(None), &cache).unwrap();
        assert_eq!(resolved, Some(("1.0".to_string(), VersionSource::VersionFile)));
    }

    #[test]
    fn test_missing_repository_uses_cache() {
        let dir = TempDir::new().unwrap();
        let cache = VersionFile::at(dir.path().join("version.toml"));
        cache.write("2.1").unwrap();

        let resolved = resolve_with_cache(Err(not_found()), &cache).unwrap();
        assert_eq!(resolved, Some(("2.1".to_string(), VersionSource::VersionFile)));
    }

    #[test]
    fn test_missing_repository_without_cache_is_an_error() {
        let dir = TempDir::new().unwrap();
        let cache = VersionFile::at(dir.path().join("version.toml"));

        let err = resolve_with_cache(Err(not_found()), &cache).unwrap_err();
        assert!(err.is_repository_not_found());
    }

    #[test]
    fn test_other_errors_propagate() {
        let dir = TempDir::new().unwrap();
        let cache = VersionFile::at(dir.path().join("version.toml"));
        cache.write("2.1").unwrap();

        let err = resolve_with_cache(Err(TagVersionError::config("bad")), &cache).unwrap_err();
        assert!(err.to_string().contains("bad"));
    }
}

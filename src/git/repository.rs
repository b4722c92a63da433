use std::path::Path;

use chrono::{DateTime, Utc};
use git2::{ObjectType, Oid, Repository as Git2Repo};

use crate::domain::CommitInfo;
use crate::error::{Result, TagVersionError};
use crate::git::{GitObject, Reference, TagObject};

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open the repository rooted at `path` (work tree or `.git` directory)
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = Git2Repo::open(path)
            .map_err(|e| TagVersionError::repository_not_found(path, e))?;

        Ok(Git2Repository { repo })
    }

    /// Open the repository containing `path`, searching parent directories
    pub fn discover<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = Git2Repo::discover(path)
            .map_err(|e| TagVersionError::repository_not_found(path, e))?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }
}

/// `None` when the timestamp is outside chrono's representable range
fn utc_time(time: git2::Time) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(time.seconds(), 0)
}

fn timestamp_error(id: Oid, time: git2::Time) -> TagVersionError {
    git2::Error::from_str(&format!(
        "object {} has an out-of-range timestamp {}",
        id,
        time.seconds()
    ))
    .into()
}

fn format_signature(signature: &git2::Signature<'_>) -> String {
    let name = String::from_utf8_lossy(signature.name_bytes());
    let email = String::from_utf8_lossy(signature.email_bytes());
    format!("{} <{}>", name, email)
}

impl super::Repository for Git2Repository {
    fn references(&self) -> Result<Vec<Reference>> {
        let mut references = Vec::new();

        for reference in self.repo.references()? {
            let reference = match reference {
                Ok(reference) => reference,
                Err(e) => {
                    tracing::debug!("skipping unreadable reference: {}", e);
                    continue;
                }
            };

            let name = String::from_utf8_lossy(reference.name_bytes()).into_owned();
            match reference.target() {
                Some(target) => references.push(Reference { name, target }),
                None => tracing::debug!(reference = %name, "skipping symbolic reference"),
            }
        }

        Ok(references)
    }

    fn resolve(&self, id: Oid) -> Result<GitObject> {
        let object = self.repo.find_object(id, None)?;

        match object.kind() {
            Some(ObjectType::Commit) => {
                let commit = self.repo.find_commit(id)?;
                let time = utc_time(commit.time()).ok_or_else(|| timestamp_error(id, commit.time()))?;
                let author = format_signature(&commit.author());

                Ok(GitObject::Commit(CommitInfo {
                    id: id.to_string(),
                    time,
                    author,
                }))
            }
            Some(ObjectType::Tag) => {
                let tag = self.repo.find_tag(id)?;
                let name = String::from_utf8_lossy(tag.name_bytes()).into_owned();
                let time = match tag.tagger() {
                    Some(tagger) => Some(
                        utc_time(tagger.when()).ok_or_else(|| timestamp_error(id, tagger.when()))?,
                    ),
                    None => None,
                };

                Ok(GitObject::Tag(TagObject {
                    id,
                    name,
                    time,
                    target: tag.target_id(),
                }))
            }
            Some(kind) => Ok(GitObject::Other(kind)),
            None => Ok(GitObject::Other(ObjectType::Any)),
        }
    }
}

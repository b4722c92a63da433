//! Git object-model abstraction layer
//!
//! The tag collector only needs two capabilities from a repository: listing
//! its references and resolving an object id to the object it names. Both are
//! expressed by the [Repository] trait so the collector can run against a
//! real repository or an in-memory one.
//!
//! - [repository::Git2Repository]: implementation backed by the `git2` crate
//! - [mock::MockRepository]: in-memory implementation for tests
//!
//! ```rust
//! # use git_tag_version::git::{GitObject, Repository};
//! # fn example<R: Repository>(repo: &R) -> git_tag_version::Result<()> {
//! for reference in repo.references()? {
//!     if let Ok(GitObject::Commit(commit)) = repo.resolve(reference.target) {
//!         println!("{} -> {}", reference.name, commit.id);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use chrono::{DateTime, Utc};
use git2::{ObjectType, Oid};

use crate::domain::CommitInfo;
use crate::error::Result;

/// A named pointer to an object id, e.g. `refs/tags/v1.2`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    pub name: String,
    pub target: Oid,
}

impl Reference {
    pub fn new(name: impl Into<String>, target: Oid) -> Self {
        Reference {
            name: name.into(),
            target,
        }
    }
}

/// An annotated tag object as stored in the repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagObject {
    pub id: Oid,
    pub name: String,
    /// Tagger time; `None` for tags written without a tagger
    pub time: Option<DateTime<Utc>>,
    pub target: Oid,
}

/// A resolved repository object
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitObject {
    Commit(CommitInfo),
    Tag(TagObject),
    /// Trees and blobs; tags pointing at them carry no version
    Other(ObjectType),
}

/// Read-only access to a repository's references and objects
///
/// Implementations release any underlying handle when dropped.
pub trait Repository {
    /// List every direct reference (branches, tags, remotes, ...).
    ///
    /// References that cannot be read, and symbolic references, are left out.
    fn references(&self) -> Result<Vec<Reference>>;

    /// Look up the object named by `id`
    fn resolve(&self, id: Oid) -> Result<GitObject>;
}

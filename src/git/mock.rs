use std::collections::HashMap;

use chrono::{DateTime, TimeZone, Utc};
use git2::{ObjectType, Oid};

use crate::domain::CommitInfo;
use crate::error::Result;
use crate::git::{GitObject, Reference, Repository, TagObject};

/// Mock repository for testing without actual git operations
pub struct MockRepository {
    references: Vec<Reference>,
    objects: HashMap<Oid, GitObject>,
    next_id: u8,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            references: Vec::new(),
            objects: HashMap::new(),
            next_id: 1,
        }
    }

    fn allocate_id(&mut self) -> Oid {
        let id = Oid::from_bytes(&[self.next_id; 20]).unwrap_or_else(|_| Oid::zero());
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    fn timestamp(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).single().unwrap_or_default()
    }

    /// Add a commit made at `secs` seconds since the epoch
    pub fn add_commit(&mut self, secs: i64, author: impl Into<String>) -> Oid {
        let id = self.allocate_id();
        self.objects.insert(
            id,
            GitObject::Commit(CommitInfo {
                id: id.to_string(),
                time: Self::timestamp(secs),
                author: author.into(),
            }),
        );
        id
    }

    /// Add an annotated tag object pointing at `target`
    pub fn add_tag_object(&mut self, name: impl Into<String>, secs: Option<i64>, target: Oid) -> Oid {
        let id = self.allocate_id();
        self.objects.insert(
            id,
            GitObject::Tag(TagObject {
                id,
                name: name.into(),
                time: secs.map(Self::timestamp),
                target,
            }),
        );
        id
    }

    /// Add a tree object
    pub fn add_tree(&mut self) -> Oid {
        let id = self.allocate_id();
        self.objects.insert(id, GitObject::Other(ObjectType::Tree));
        id
    }

    /// Add a reference; order of insertion is the enumeration order
    pub fn add_reference(&mut self, name: impl Into<String>, target: Oid) {
        self.references.push(Reference::new(name, target));
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn references(&self) -> Result<Vec<Reference>> {
        Ok(self.references.clone())
    }

    fn resolve(&self, id: Oid) -> Result<GitObject> {
        self.objects.get(&id).cloned().ok_or_else(|| {
            git2::Error::new(
                git2::ErrorCode::NotFound,
                git2::ErrorClass::Odb,
                format!("object not found: {}", id),
            )
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_repository_objects() {
        let mut repo = MockRepository::new();
        let commit = repo.add_commit(100, "Author <a@example.com>");
        let tag = repo.add_tag_object("v1.0", Some(200), commit);
        assert_ne!(commit, tag);

        match repo.resolve(commit).unwrap() {
            GitObject::Commit(info) => assert_eq!(info.time.timestamp(), 100),
            other => panic!("expected commit, got {:?}", other),
        }
        match repo.resolve(tag).unwrap() {
            GitObject::Tag(info) => assert_eq!(info.target, commit),
            other => panic!("expected tag, got {:?}", other),
        }
    }

    #[test]
    fn test_mock_repository_missing_object() {
        let repo = MockRepository::new();
        assert!(repo.resolve(Oid::zero()).is_err());
    }

    #[test]
    fn test_mock_repository_references_keep_order() {
        let mut repo = MockRepository::new();
        let commit = repo.add_commit(100, "A <a@example.com>");
        repo.add_reference("refs/heads/main", commit);
        repo.add_reference("refs/tags/v1", commit);

        let names: Vec<String> = repo.references().unwrap().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["refs/heads/main", "refs/tags/v1"]);
    }

    #[test]
    fn test_mock_repository_default() {
        let repo = MockRepository::default();
        assert!(repo.references().unwrap().is_empty());
    }
}

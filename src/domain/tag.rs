use chrono::{DateTime, Utc};

/// Commit metadata a tag ultimately points at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitInfo {
    /// Full hex id of the commit
    pub id: String,
    /// Committer time in UTC
    pub time: DateTime<Utc>,
    /// Author formatted as `Name <email>`
    pub author: String,
}

/// Metadata carried by an annotated tag object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub tag_time: DateTime<Utc>,
    pub tag_id: String,
    pub tag_name: String,
}

/// What a tag reference resolves to.
///
/// Lightweight tags point straight at a commit; annotated tags wrap one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagTarget {
    DirectCommit(CommitInfo),
    AnnotatedTag(Annotation, CommitInfo),
}

impl TagTarget {
    pub fn commit(&self) -> &CommitInfo {
        match self {
            TagTarget::DirectCommit(commit) => commit,
            TagTarget::AnnotatedTag(_, commit) => commit,
        }
    }

    pub fn annotation(&self) -> Option<&Annotation> {
        match self {
            TagTarget::DirectCommit(_) => None,
            TagTarget::AnnotatedTag(annotation, _) => Some(annotation),
        }
    }
}

/// One resolvable tag, as reported by the tag collector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRecord {
    pub name: String,
    pub commit_time: DateTime<Utc>,
    pub commit_id: String,
    pub author: String,
    pub annotation: Option<Annotation>,
}

impl TagRecord {
    /// Build a record for the bare tag `name` from its resolved target
    pub fn new(name: impl Into<String>, target: TagTarget) -> Self {
        let commit = target.commit();

        TagRecord {
            name: name.into(),
            commit_time: commit.time,
            commit_id: commit.id.clone(),
            author: commit.author.clone(),
            annotation: target.annotation().cloned(),
        }
    }

    pub fn is_annotated(&self) -> bool {
        self.annotation.is_some()
    }

    /// First seven characters of the commit id
    pub fn short_id(&self) -> &str {
        let end = self.commit_id.len().min(7);
        &self.commit_id[..end]
    }
}

/// Strip the reference namespace from a ref name ("refs/tags/v1.2" -> "v1.2").
///
/// Splits on the last `/`, so nested names keep only their final segment.
pub fn bare_tag_name(ref_name: &str) -> &str {
    match ref_name.rsplit_once('/') {
        Some((_, name)) => name,
        None => ref_name,
    }
}

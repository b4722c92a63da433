use std::collections::HashMap;
use std::path::Path;

use crate::domain::{bare_tag_name, Annotation, CommitInfo, TagRecord, TagTarget};
use crate::error::Result;
use crate::git::{Git2Repository, GitObject, Repository, TagObject};

/// Namespace prefix of tag references
pub const DEFAULT_TAG_NAMESPACE: &str = "refs/tags/";

/// Upper bound on tag-of-tag chains followed before giving up
const MAX_PEEL_DEPTH: usize = 16;

/// Collects the tags of a repository, newest commit first
#[derive(Debug, Clone)]
pub struct TagCollector {
    namespace: String,
}

impl TagCollector {
    /// Create a collector for references under `namespace` (e.g. "refs/tags/")
    pub fn new(namespace: impl Into<String>) -> Self {
        TagCollector {
            namespace: namespace.into(),
        }
    }

    /// Resolve every tag reference in `repo` and rank them by commit time.
    ///
    /// References outside the namespace, or whose target is not ultimately a
    /// commit, are skipped. When two references share a bare name the later
    /// one replaces the earlier record in place.
    pub fn collect<R: Repository>(&self, repo: &R) -> Result<Vec<(String, TagRecord)>> {
        let mut tags: Vec<(String, TagRecord)> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();

        for reference in repo.references()? {
            if !reference.name.starts_with(&self.namespace) {
                continue;
            }

            let target = match resolve_tag_target(repo, &reference.name, reference.target) {
                Some(target) => target,
                None => continue,
            };

            let name = bare_tag_name(&reference.name).to_string();
            let record = TagRecord::new(name.clone(), target);

            match positions.get(&name).copied() {
                Some(index) => {
                    tracing::debug!(tag = %name, reference = %reference.name, "overwriting tag with the same name");
                    tags[index].1 = record;
                }
                None => {
                    positions.insert(name.clone(), tags.len());
                    tags.push((name, record));
                }
            }
        }

        // stable: equal commit times keep enumeration order
        tags.sort_by(|a, b| b.1.commit_time.cmp(&a.1.commit_time));

        Ok(tags)
    }
}

impl Default for TagCollector {
    fn default() -> Self {
        TagCollector::new(DEFAULT_TAG_NAMESPACE)
    }
}

/// Decide whether a tag reference is lightweight or annotated and find the
/// commit behind it. `None` means the reference is skipped.
fn resolve_tag_target<R: Repository>(repo: &R, ref_name: &str, id: git2::Oid) -> Option<TagTarget> {
    let object = match repo.resolve(id) {
        Ok(object) => object,
        Err(e) => {
            tracing::debug!(reference = %ref_name, "skipping unresolvable tag: {}", e);
            return None;
        }
    };

    match object {
        GitObject::Commit(commit) => Some(TagTarget::DirectCommit(commit)),
        GitObject::Tag(tag) => {
            let commit = peel_to_commit(repo, ref_name, &tag)?;
            let annotation = Annotation {
                tag_time: tag.time.unwrap_or(commit.time),
                tag_id: tag.id.to_string(),
                tag_name: tag.name,
            };
            Some(TagTarget::AnnotatedTag(annotation, commit))
        }
        GitObject::Other(kind) => {
            tracing::debug!(reference = %ref_name, "skipping tag pointing at a {}", kind);
            None
        }
    }
}

fn peel_to_commit<R: Repository>(repo: &R, ref_name: &str, tag: &TagObject) -> Option<CommitInfo> {
    let mut target = tag.target;

    for _ in 0..MAX_PEEL_DEPTH {
        match repo.resolve(target) {
            Ok(GitObject::Commit(commit)) => return Some(commit),
            Ok(GitObject::Tag(inner)) => target = inner.target,
            Ok(GitObject::Other(kind)) => {
                tracing::debug!(reference = %ref_name, "skipping annotated tag of a {}", kind);
                return None;
            }
            Err(e) => {
                tracing::debug!(reference = %ref_name, "skipping unresolvable tag target: {}", e);
                return None;
            }
        }
    }

    tracing::debug!(reference = %ref_name, "skipping tag chain deeper than {}", MAX_PEEL_DEPTH);
    None
}

/// Collect the tags of the repository at `path`, newest commit first.
///
/// The repository handle is released before returning.
pub fn collect_tags<P: AsRef<Path>>(path: P) -> Result<Vec<(String, TagRecord)>> {
    let repo = Git2Repository::open(path)?;
    TagCollector::default().collect(&repo)
}

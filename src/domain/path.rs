//! Ancestor paths
//!
//! A path lists a tag's ancestors from the most distant one down to the
//! immediate parent. The empty path marks a root tag.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use super::id::TagId;

#[derive(Debug, Error, PartialEq)]
pub enum PathError {
    #[error("Path is empty: there is no parent")]
    Empty,

    #[error("Path contains the tag itself: {0}")]
    SelfReference(TagId),

    #[error("Path contains {0} more than once")]
    Duplicate(TagId),

    #[error("Ancestor not found: {0}")]
    UnknownAncestor(TagId),

    #[error("Ancestor {0} does not sit at this position in its tree")]
    BrokenChain(TagId),
}

/// Ordered ancestor chain, root first
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path(Vec<TagId>);

impl Path {
    /// Creates the empty (root) path
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Returns true if the path has no ancestors
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of ancestors
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the immediate parent (last element)
    pub fn parent(&self) -> Result<TagId, PathError> {
        self.0.last().copied().ok_or(PathError::Empty)
    }

    /// Returns the most distant ancestor, if any
    pub fn root(&self) -> Option<TagId> {
        self.0.first().copied()
    }

    /// Returns true if `id` appears anywhere in the chain
    pub fn contains(&self, id: &TagId) -> bool {
        self.0.contains(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TagId> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[TagId] {
        &self.0
    }

    /// Copies the chain out as a plain vector
    pub fn to_tag_ids(&self) -> Vec<TagId> {
        self.0.clone()
    }

    /// Returns this path extended by one more ancestor
    pub fn with_parent(&self, parent: TagId) -> Path {
        let mut ids = self.0.clone();
        ids.push(parent);
        Path(ids)
    }

    /// Checks that the path can be carried by the tag `id`
    ///
    /// A tag may not be its own ancestor, and no ancestor may appear twice.
    pub fn validate_for(&self, id: &TagId) -> Result<(), PathError> {
        let mut seen = HashSet::with_capacity(self.0.len());
        for ancestor in &self.0 {
            if ancestor == id {
                return Err(PathError::SelfReference(*id));
            }
            if !seen.insert(ancestor) {
                return Err(PathError::Duplicate(*ancestor));
            }
        }
        Ok(())
    }
}

impl From<Vec<TagId>> for Path {
    fn from(ids: Vec<TagId>) -> Self {
        Self(ids)
    }
}

impl From<Path> for Vec<TagId> {
    fn from(path: Path) -> Self {
        path.0
    }
}

impl FromIterator<TagId> for Path {
    fn from_iter<I: IntoIterator<Item = TagId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a TagId;
    type IntoIter = std::slice::Iter<'a, TagId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

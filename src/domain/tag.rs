//! Tag domain model
//!
//! Tags are the nodes of a classification's taxonomy. Each tag carries its
//! whole ancestor chain, so its place in the tree can be read without
//! loading any other tag.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::forest::ForestError;
use super::id::{ClassificationId, TagId};
use super::name::LocalizedValue;
use super::path::{Path, PathError};

/// What was being attempted when a leaf check failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeafAction {
    Move,
    AliasSource,
    AliasDestination,
}

impl fmt::Display for LeafAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeafAction::Move => f.write_str("can't move tag"),
            LeafAction::AliasSource => f.write_str("can't alias tag, source tag"),
            LeafAction::AliasDestination => f.write_str("can't alias tag, destination tag"),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum TagError {
    #[error("Missing classification id")]
    MissingClassification,

    #[error("Missing name: at least one locale is required")]
    MissingName,

    #[error("Tag {0} is a root and has no parent")]
    IsRoot(TagId),

    #[error("{action} {id}: not a leaf")]
    NotLeaf { id: TagId, action: LeafAction },

    #[error(transparent)]
    Path(#[from] PathError),

    #[error(transparent)]
    Forest(#[from] ForestError),
}

/// Workflow status of a tag
///
/// Only `Ready` is ever assigned here. The other states are reserved for
/// merge/lock workflows and carry no behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TagStatus {
    #[default]
    Ready,
    Combined,
    Merged,
    Merging,
    Locked,
}

impl TagStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TagStatus::Ready => "ready",
            TagStatus::Combined => "combined",
            TagStatus::Merged => "merged",
            TagStatus::Merging => "merging",
            TagStatus::Locked => "locked",
        }
    }
}

impl fmt::Display for TagStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TagStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ready" => Ok(TagStatus::Ready),
            "combined" => Ok(TagStatus::Combined),
            "merged" => Ok(TagStatus::Merged),
            "merging" => Ok(TagStatus::Merging),
            "locked" => Ok(TagStatus::Locked),
            other => Err(format!("Unknown tag status: {}", other)),
        }
    }
}

/// Request to create a tag
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagInsert {
    pub classification_id: ClassificationId,
    pub name: LocalizedValue,
    /// Legacy single-parent hint. Never stored; `ancestors` decides.
    pub parent: Option<TagId>,
    pub ancestors: Path,
}

impl TagInsert {
    /// Creates a request for a root tag
    pub fn new(classification_id: impl Into<ClassificationId>, name: LocalizedValue) -> Self {
        Self {
            classification_id: classification_id.into(),
            name,
            parent: None,
            ancestors: Path::new(),
        }
    }

    /// Places the new tag under the given ancestors
    pub fn with_ancestors(mut self, ancestors: impl Into<Path>) -> Self {
        self.ancestors = ancestors.into();
        self
    }

    /// Places the new tag directly below `parent`
    pub fn under(self, parent: &Tag) -> Self {
        self.with_ancestors(parent.child_path())
    }
}

/// A node of a classification's taxonomy
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: TagId,
    pub classification_id: ClassificationId,
    pub name: LocalizedValue,
    /// Root-first chain; empty for roots
    #[serde(default)]
    pub ancestors: Path,
    #[serde(default)]
    pub status: TagStatus,
}

impl Tag {
    /// Returns true if the tag has no ancestors
    pub fn is_root(&self) -> bool {
        self.ancestors.is_empty()
    }

    /// Returns the immediate parent
    pub fn parent(&self) -> Result<TagId, TagError> {
        if self.is_root() {
            return Err(TagError::IsRoot(self.id));
        }

        Ok(self.ancestors.parent()?)
    }

    pub fn ancestors(&self) -> &Path {
        &self.ancestors
    }

    /// Number of ancestors (0 for roots)
    pub fn depth(&self) -> usize {
        self.ancestors.len()
    }

    /// The path a direct child of this tag carries
    pub fn child_path(&self) -> Path {
        self.ancestors.with_parent(self.id)
    }

    /// Returns true if `other` is this tag's immediate parent
    pub fn is_child_of(&self, other: &Tag) -> bool {
        self.ancestors.parent().is_ok_and(|p| p == other.id)
    }

    /// Returns true if `ancestor` appears anywhere in this tag's chain
    pub fn is_descendant_of(&self, ancestor: &TagId) -> bool {
        self.ancestors.contains(ancestor)
    }
}

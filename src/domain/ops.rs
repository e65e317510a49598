//! Tag operations
//!
//! Stateless functions that validate a request and return a new tag value.
//! Input tags are only borrowed, so a failed operation leaves the caller's
//! values exactly as they were.
//!
//! Leaf-only rules: a tag with children can be neither moved nor aliased,
//! since its descendants' ancestor paths would silently go stale.

use serde::{Deserialize, Serialize};

use super::children::{ChildrenFinder, SnapshotFinder};
use super::forest::TagForest;
use super::id::{IdGenerator, UuidGenerator};
use super::name::LocalizedValue;
use super::path::Path;
use super::tag::{LeafAction, Tag, TagError, TagInsert, TagStatus};

/// How strictly a new ancestor path is checked before a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PathCheck {
    /// Accept any path
    Unchecked,
    /// Reject paths containing the tag itself or repeated ancestors
    #[default]
    NoSelfReference,
    /// Also require the path to be an existing chain in the snapshot
    Rooted,
}

/// Rejects names without any locale
pub fn validate_name(name: &LocalizedValue) -> Result<(), TagError> {
    if name.is_empty() {
        return Err(TagError::MissingName);
    }
    Ok(())
}

/// Creates a tag with a random ID
pub fn create_tag(insert: TagInsert) -> Result<Tag, TagError> {
    create_tag_with(insert, &UuidGenerator)
}

/// Creates a tag, drawing its ID from `ids`
pub fn create_tag_with(insert: TagInsert, ids: &impl IdGenerator) -> Result<Tag, TagError> {
    if insert.classification_id.is_empty() {
        return Err(TagError::MissingClassification);
    }
    validate_name(&insert.name)?;

    if let Some(hint) = insert.parent {
        if insert.ancestors.parent().ok() != Some(hint) {
            tracing::debug!(
                parent = %hint,
                ancestors = insert.ancestors.len(),
                "legacy parent hint ignored, ancestors decide placement"
            );
        }
    }

    Ok(Tag {
        id: ids.next_id(),
        classification_id: insert.classification_id,
        name: insert.name,
        ancestors: insert.ancestors,
        status: TagStatus::Ready,
    })
}

/// Returns a copy of `tag` carrying `name`
pub fn rename_tag(tag: &Tag, name: LocalizedValue) -> Result<Tag, TagError> {
    validate_name(&name)?;

    Ok(Tag {
        name,
        ..tag.clone()
    })
}

/// Returns a copy of `tag` placed under `path`
///
/// Only leaves may move. The path itself is taken as given; see
/// [`move_tag_checked`] for validation.
pub fn move_tag(tag: &Tag, path: Path, children: &impl ChildrenFinder) -> Result<Tag, TagError> {
    ensure_leaf(tag, children, LeafAction::Move)?;

    Ok(Tag {
        ancestors: path,
        ..tag.clone()
    })
}

/// Moves a leaf after validating `path` against `snapshot`
pub fn move_tag_checked(
    tag: &Tag,
    path: Path,
    snapshot: &[Tag],
    check: PathCheck,
) -> Result<Tag, TagError> {
    let finder = SnapshotFinder::new(snapshot);
    ensure_leaf(tag, &finder, LeafAction::Move)?;

    match check {
        PathCheck::Unchecked => {}
        PathCheck::NoSelfReference => path.validate_for(&tag.id)?,
        PathCheck::Rooted => {
            path.validate_for(&tag.id)?;
            TagForest::from_tags(snapshot)?.validate_chain(&path)?;
        }
    }

    move_tag(tag, path, &finder)
}

/// Makes `source` an alias of `destination`
///
/// The result keeps `source.id` and takes everything else from
/// `destination`. Both tags must be leaves; the source is checked first.
pub fn make_alias_of(
    source: &Tag,
    destination: &Tag,
    children: &impl ChildrenFinder,
) -> Result<Tag, TagError> {
    ensure_leaf(source, children, LeafAction::AliasSource)?;
    ensure_leaf(destination, children, LeafAction::AliasDestination)?;

    Ok(Tag {
        id: source.id,
        ..destination.clone()
    })
}

/// Compares everything except the ID
pub fn same_payload(a: &Tag, b: &Tag) -> bool {
    a.ancestors == b.ancestors
        && a.classification_id == b.classification_id
        && a.name == b.name
        && a.status == b.status
}

fn ensure_leaf(
    tag: &Tag,
    children: &impl ChildrenFinder,
    action: LeafAction,
) -> Result<(), TagError> {
    if children.has_children(tag) {
        tracing::debug!(tag = %tag.id, ?action, "rejected: tag has children");
        return Err(TagError::NotLeaf { id: tag.id, action });
    }
    Ok(())
}

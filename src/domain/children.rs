//! Children lookup
//!
//! Leaf-only operations ask a [`ChildrenFinder`] whether a tag currently
//! has direct children. The answer always comes from a caller-supplied
//! snapshot; nothing here queries a store.

use std::collections::HashMap;

use super::id::TagId;
use super::tag::Tag;

/// Answers "does this tag have at least one direct child?"
pub trait ChildrenFinder {
    fn has_children(&self, tag: &Tag) -> bool;
}

impl<F> ChildrenFinder for F
where
    F: Fn(&Tag) -> bool,
{
    fn has_children(&self, tag: &Tag) -> bool {
        self(tag)
    }
}

/// Linear scan over a snapshot
///
/// Every call walks the whole snapshot. Root tags are skipped since they
/// have no parent to compare against.
#[derive(Debug, Clone, Copy)]
pub struct SnapshotFinder<'a> {
    tags: &'a [Tag],
}

impl<'a> SnapshotFinder<'a> {
    pub fn new(tags: &'a [Tag]) -> Self {
        Self { tags }
    }
}

impl ChildrenFinder for SnapshotFinder<'_> {
    fn has_children(&self, tag: &Tag) -> bool {
        self.tags.iter().any(|t| match t.parent() {
            Ok(parent) => parent == tag.id,
            Err(_) => false,
        })
    }
}

/// Parent-to-children index built once from a snapshot
#[derive(Debug, Clone, Default)]
pub struct ChildIndex {
    children: HashMap<TagId, Vec<TagId>>,
}

impl ChildIndex {
    pub fn from_tags<'a>(tags: impl IntoIterator<Item = &'a Tag>) -> Self {
        let mut children: HashMap<TagId, Vec<TagId>> = HashMap::new();
        for tag in tags {
            if let Ok(parent) = tag.parent() {
                children.entry(parent).or_default().push(tag.id);
            }
        }
        Self { children }
    }

    /// Direct children of `id`, in snapshot order
    pub fn children_of(&self, id: &TagId) -> &[TagId] {
        self.children.get(id).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl ChildrenFinder for ChildIndex {
    fn has_children(&self, tag: &Tag) -> bool {
        !self.children_of(&tag.id).is_empty()
    }
}

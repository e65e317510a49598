//! Tag forest
//!
//! Read-only graph view over a snapshot of tags, one tree per root.
//! Uses petgraph, with an edge from each tag's immediate parent to the tag.
//!
//! Parents missing from the snapshot are tolerated: the tag simply has no
//! incoming edge and is reported by [`TagForest::orphans`].

use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::Bfs;
use petgraph::Direction;
use std::collections::HashMap;
use thiserror::Error;

use super::children::ChildrenFinder;
use super::id::TagId;
use super::path::{Path, PathError};
use super::tag::Tag;

#[derive(Debug, Error, PartialEq)]
pub enum ForestError {
    #[error("Duplicate tag in snapshot: {0}")]
    DuplicateTag(TagId),

    #[error("Parent links form a cycle through {0}")]
    CycleDetected(TagId),
}

/// Snapshot of tags arranged as trees
#[derive(Debug, Default)]
pub struct TagForest {
    graph: DiGraph<TagId, ()>,
    node_map: HashMap<TagId, NodeIndex>,
    tags: HashMap<TagId, Tag>,
}

impl TagForest {
    /// Builds the forest from a snapshot
    pub fn from_tags<'a>(tags: impl IntoIterator<Item = &'a Tag>) -> Result<Self, ForestError> {
        let mut forest = Self::default();

        // First pass: add all nodes
        let tags: Vec<_> = tags.into_iter().collect();
        for tag in &tags {
            if forest.node_map.contains_key(&tag.id) {
                return Err(ForestError::DuplicateTag(tag.id));
            }
            let idx = forest.graph.add_node(tag.id);
            forest.node_map.insert(tag.id, idx);
            forest.tags.insert(tag.id, (*tag).clone());
        }

        // Second pass: parent -> child edges
        for tag in &tags {
            let Ok(parent) = tag.parent() else {
                continue;
            };
            if parent == tag.id {
                return Err(ForestError::CycleDetected(tag.id));
            }
            match forest.node_map.get(&parent) {
                Some(parent_idx) => {
                    forest.graph.add_edge(*parent_idx, forest.node_map[&tag.id], ());
                }
                None => {
                    tracing::trace!(tag = %tag.id, parent = %parent, "parent not in snapshot");
                }
            }
        }

        // Each tag has at most one parent edge, so any cycle is found by
        // walking parents from one of its members.
        if is_cyclic_directed(&forest.graph) {
            if let Some(culprit) = forest.first_cycle_member() {
                return Err(ForestError::CycleDetected(culprit));
            }
        }

        Ok(forest)
    }

    /// Finds a node that is its own ancestor by walking parent edges
    fn first_cycle_member(&self) -> Option<TagId> {
        let limit = self.graph.node_count();
        self.graph.node_indices().find_map(|start| {
            let mut current = start;
            for _ in 0..limit {
                current = self
                    .graph
                    .neighbors_directed(current, Direction::Incoming)
                    .next()?;
                if current == start {
                    return self.graph.node_weight(start).copied();
                }
            }
            None
        })
    }

    pub fn contains(&self, id: &TagId) -> bool {
        self.node_map.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.node_map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_map.is_empty()
    }

    pub fn get(&self, id: &TagId) -> Option<&Tag> {
        self.tags.get(id)
    }

    /// Tags with an empty ancestor path
    pub fn roots(&self) -> Vec<TagId> {
        self.ids_where(|tag| tag.is_root())
    }

    /// Non-root tags whose parent is missing from the snapshot
    pub fn orphans(&self) -> Vec<TagId> {
        self.ids_where(|tag| tag.parent().is_ok_and(|p| !self.contains(&p)))
    }

    /// Direct children of a tag
    pub fn children(&self, id: &TagId) -> Vec<TagId> {
        let Some(idx) = self.node_map.get(id) else {
            return vec![];
        };

        let mut children: Vec<TagId> = self
            .graph
            .neighbors_directed(*idx, Direction::Outgoing)
            .filter_map(|child| self.graph.node_weight(child).copied())
            .collect();
        children.sort();
        children
    }

    /// All tags below `id`, breadth-first, excluding `id` itself
    pub fn descendants(&self, id: &TagId) -> Vec<TagId> {
        let Some(idx) = self.node_map.get(id) else {
            return vec![];
        };

        let mut bfs = Bfs::new(&self.graph, *idx);
        let mut found = Vec::new();
        while let Some(node) = bfs.next(&self.graph) {
            if node == *idx {
                continue;
            }
            if let Some(tag_id) = self.graph.node_weight(node) {
                found.push(*tag_id);
            }
        }
        found
    }

    /// Returns true if the tag has at least one child in the snapshot
    pub fn has_children_of(&self, id: &TagId) -> bool {
        self.node_map.get(id).is_some_and(|idx| {
            self.graph
                .neighbors_directed(*idx, Direction::Outgoing)
                .next()
                .is_some()
        })
    }

    /// Checks that `path` is an existing chain in this forest
    ///
    /// `path[0]` must be a root, and every later element must be a tag
    /// whose own ancestors are exactly the elements before it.
    pub fn validate_chain(&self, path: &Path) -> Result<(), PathError> {
        let ids = path.as_slice();
        for (position, ancestor) in ids.iter().enumerate() {
            let tag = self
                .get(ancestor)
                .ok_or(PathError::UnknownAncestor(*ancestor))?;
            if tag.ancestors.as_slice() != &ids[..position] {
                return Err(PathError::BrokenChain(*ancestor));
            }
        }
        Ok(())
    }

    /// Tags whose stored ancestors disagree with their parent's chain
    ///
    /// Only tags whose parent is present are considered. Moves never
    /// cascade, so a moved parent leaves its old descendants stale.
    pub fn inconsistent_tags(&self) -> Vec<TagId> {
        self.ids_where(|tag| {
            let Ok(parent_id) = tag.parent() else {
                return false;
            };
            match self.get(&parent_id) {
                Some(parent) => tag.ancestors != parent.child_path(),
                None => false,
            }
        })
    }

    fn ids_where(&self, predicate: impl Fn(&Tag) -> bool) -> Vec<TagId> {
        let mut ids: Vec<TagId> = self
            .tags
            .values()
            .filter(|tag| predicate(tag))
            .map(|tag| tag.id)
            .collect();
        ids.sort();
        ids
    }
}

impl ChildrenFinder for TagForest {
    fn has_children(&self, tag: &Tag) -> bool {
        self.has_children_of(&tag.id)
    }
}

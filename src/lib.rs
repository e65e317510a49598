//! Tagtree - hierarchical tag taxonomies
//!
//! Tags belong to a classification and form trees (a classification may
//! have several roots). Every tag stores its full ancestor path. Domain
//! operations create, rename, move and alias tags while keeping the
//! hierarchy consistent: only leaves may be moved or aliased.
//!
//! Storage is left to the caller. Operations that need to know whether a
//! tag has children take a snapshot of the relevant tags.

pub mod config;
pub mod domain;

pub use config::{ConfigError, TaxonomyConfig};
pub use domain::{
    create_tag, make_alias_of, move_tag, rename_tag, same_payload, ChildrenFinder,
    ClassificationId, LocalizedValue, Path, SnapshotFinder, Tag, TagError, TagId, TagInsert,
    TagStatus,
};

//! Domain models for tag taxonomies
//!
//! Contains the core business logic without any I/O concerns.

mod children;
mod forest;
mod id;
mod name;
mod ops;
mod path;
mod tag;

pub use children::{ChildIndex, ChildrenFinder, SnapshotFinder};
pub use forest::{ForestError, TagForest};
pub use id::{ClassificationId, FixedIdGenerator, IdError, IdGenerator, TagId, UuidGenerator};
pub use name::LocalizedValue;
pub use ops::{
    create_tag, create_tag_with, make_alias_of, move_tag, move_tag_checked, rename_tag,
    same_payload, validate_name, PathCheck,
};
pub use path::{Path, PathError};
pub use tag::{LeafAction, Tag, TagError, TagInsert, TagStatus};

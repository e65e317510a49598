//! Identifiers for tags and classifications
//!
//! ID Format:
//! - Tag IDs: hyphenated UUID (e.g., `6f1c2d9e-3b7a-4c1e-9f0a-2d4b6c8e0a1f`)
//! - Classification IDs: any non-empty string chosen by the caller
//!
//! Fresh tag IDs come from an [`IdGenerator`]. Production code uses
//! [`UuidGenerator`]; tests can pin the value with [`FixedIdGenerator`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq)]
pub enum IdError {
    #[error("Tag ID is empty")]
    Empty,

    #[error("Invalid tag ID format: expected a UUID, got '{0}'")]
    Invalid(String),
}

/// Unique identifier of a tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TagId(Uuid);

impl TagId {
    /// The nil sentinel. Never produced by a generator.
    pub const NIL: TagId = TagId(Uuid::nil());

    /// Well-known value for deterministic tests
    pub const FIXED: TagId = TagId(Uuid::from_u128(0x0000_0000_0000_4000_8000_0000_0000_f1ed));

    /// Creates a new random tag ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wraps an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Returns true for the nil sentinel
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl Default for TagId {
    fn default() -> Self {
        Self::NIL
    }
}

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for TagId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(IdError::Empty);
        }

        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| IdError::Invalid(s.to_string()))
    }
}

impl TryFrom<String> for TagId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TagId> for String {
    fn from(id: TagId) -> Self {
        id.to_string()
    }
}

impl From<Uuid> for TagId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

/// Identifier of the taxonomy a tag belongs to
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassificationId(String);

impl ClassificationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ClassificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ClassificationId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ClassificationId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Source of fresh tag IDs
///
/// Implementations must never hand out the same value twice within the
/// lifetime of a classification's tag set.
pub trait IdGenerator {
    fn next_id(&self) -> TagId;
}

/// Random v4 UUIDs
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> TagId {
        TagId::new()
    }
}

/// Always returns the same ID
#[derive(Debug, Clone, Copy)]
pub struct FixedIdGenerator(TagId);

impl FixedIdGenerator {
    pub fn new(id: TagId) -> Self {
        Self(id)
    }
}

impl Default for FixedIdGenerator {
    fn default() -> Self {
        Self(TagId::FIXED)
    }
}

impl IdGenerator for FixedIdGenerator {
    fn next_id(&self) -> TagId {
        self.0
    }
}

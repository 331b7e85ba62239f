use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Record - Stored Value With Identity
// ============================================================================

/// Identifier of a record, unique within one store instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub u64);

impl RecordId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for RecordId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Generic Record - pairs any field type with a store-assigned id
///
/// Serialized with the fields flattened next to the id, so a seeded agent
/// reads as `{"id": 1, "last_name": "Dupont", ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record<T> {
    pub id: RecordId,
    #[serde(flatten)]
    pub fields: T,
}

impl<T> Record<T> {
    pub fn new(id: impl Into<RecordId>, fields: T) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn fields(&self) -> &T {
        &self.fields
    }

    pub fn into_fields(self) -> T {
        self.fields
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

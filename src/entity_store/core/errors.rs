use super::record::RecordId;

// ============================================================================
// Store Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    /// A required field was empty when creating a record.
    #[error("{entity}: required field `{field}` is empty")]
    Validation {
        entity: &'static str,
        field: &'static str,
    },

    /// No record carries the requested id.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: RecordId },

    /// Seed data contained the same id twice.
    #[error("{entity}: duplicate id {id} in seed data")]
    DuplicateId { entity: &'static str, id: RecordId },

    /// The store already holds `u64::MAX`; no greater id exists.
    #[error("{entity}: record ids exhausted")]
    IdsExhausted { entity: &'static str },
}

impl StoreError {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

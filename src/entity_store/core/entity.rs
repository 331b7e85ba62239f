use super::errors::StoreError;

// ============================================================================
// Entity Trait - What a Store Needs to Know About Its Records
// ============================================================================

/// Generic Entity trait - every type kept in an `EntityStore` implements this
///
/// Validation is limited to presence checks: an entity lists its required
/// fields together with whether each one currently holds a value.
pub trait Entity: Clone {
    /// Human-readable kind, used in errors and log events (e.g. "agent").
    const KIND: &'static str;

    /// Required fields paired with their presence.
    fn required_fields(&self) -> Vec<(&'static str, bool)> {
        Vec::new()
    }

    /// Fails on the first required field that is absent.
    fn validate(&self) -> Result<(), StoreError> {
        match self
            .required_fields()
            .into_iter()
            .find(|(_, present)| !present)
        {
            Some((field, _)) => Err(StoreError::Validation {
                entity: Self::KIND,
                field,
            }),
            None => Ok(()),
        }
    }
}

/// A text field counts as present once it holds something besides whitespace.
pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

// ============================================================================
// Unit Tests
// ============================================================================

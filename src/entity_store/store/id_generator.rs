use crate::entity_store::core::RecordId;

// ============================================================================
// Monotonic Id Generator
// ============================================================================
//
// Ids only move forward. A deleted id is never handed out again, so a new
// record can never collide with one that is still in the list.
//
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    floor: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise the floor to an id that already exists (seeding).
    pub fn observe(&mut self, id: RecordId) {
        if id.value() > self.floor {
            self.floor = id.value();
        }
    }

    /// Highest id handed out or observed so far.
    pub fn floor(&self) -> RecordId {
        RecordId(self.floor)
    }

    /// Next unused id, or `None` once the floor has reached `u64::MAX`.
    pub fn next(&mut self) -> Option<RecordId> {
        let id = self.floor.checked_add(1)?;
        self.floor = id;
        Some(RecordId(id))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

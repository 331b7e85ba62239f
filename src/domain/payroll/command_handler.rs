use crate::entity_store::{EntityStore, Record, RecordId, StoreError};

use super::commands::PayrollCommand;
use super::value_objects::PayrollEntry;

// ============================================================================
// Payroll Command Handler
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct PayrollCommandHandler {
    store: EntityStore<PayrollEntry>,
}

impl PayrollCommandHandler {
    pub fn new(store: EntityStore<PayrollEntry>) -> Self {
        Self { store }
    }

    pub fn handle(
        &mut self,
        command: PayrollCommand,
    ) -> Result<Option<Record<PayrollEntry>>, StoreError> {
        match command {
            PayrollCommand::Record { entry } => self.store.create(entry).map(Some),
            PayrollCommand::Adjust {
                entry_id,
                days_worked,
                amount,
            } => self
                .store
                .patch(entry_id, |entry| PayrollEntry {
                    days_worked,
                    amount,
                    ..entry
                })
                .map(Some),
            PayrollCommand::Remove { entry_id } => {
                self.store.delete(entry_id);
                Ok(None)
            }
        }
    }

    /// Sum of every listed amount
    pub fn grand_total(&self) -> f64 {
        self.store.iter().map(|r| r.fields.amount).sum()
    }

    /// Running total paid to one agent across all of their entries
    pub fn agent_total(&self, agent_id: RecordId) -> f64 {
        self.store
            .iter()
            .filter(|r| r.fields.agent_id == agent_id)
            .map(|r| r.fields.amount)
            .sum()
    }

    pub fn entries_for(&self, agent_id: RecordId) -> Vec<Record<PayrollEntry>> {
        self.store
            .iter()
            .filter(|r| r.fields.agent_id == agent_id)
            .cloned()
            .collect()
    }

    pub fn list(&self) -> Vec<Record<PayrollEntry>> {
        self.store.list()
    }

    pub fn store(&self) -> &EntityStore<PayrollEntry> {
        &self.store
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

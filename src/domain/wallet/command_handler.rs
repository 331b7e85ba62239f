use crate::entity_store::{EntityStore, Record, StoreError};

use super::commands::WalletCommand;
use super::value_objects::WalletTransaction;

// ============================================================================
// Wallet Command Handler
// ============================================================================
//
// balance = opening balance + sum of every listed transaction
//
// ============================================================================

#[derive(Debug, Clone)]
pub struct WalletCommandHandler {
    store: EntityStore<WalletTransaction>,
    opening_balance: f64,
}

impl WalletCommandHandler {
    pub fn new(store: EntityStore<WalletTransaction>, opening_balance: f64) -> Self {
        Self {
            store,
            opening_balance,
        }
    }

    pub fn handle(
        &mut self,
        command: WalletCommand,
    ) -> Result<Option<Record<WalletTransaction>>, StoreError> {
        match command {
            WalletCommand::Credit { transaction } => self.store.create(transaction).map(Some),
            WalletCommand::Remove { transaction_id } => {
                self.store.delete(transaction_id);
                Ok(None)
            }
        }
    }

    pub fn balance(&self) -> f64 {
        self.opening_balance + self.store.iter().map(|r| r.fields.amount).sum::<f64>()
    }

    /// Newest first, the order the wallet history is read in
    pub fn history(&self) -> Vec<Record<WalletTransaction>> {
        let mut history = self.store.list();
        history.sort_by(|a, b| b.fields.date.cmp(&a.fields.date));
        history
    }

    pub fn list(&self) -> Vec<Record<WalletTransaction>> {
        self.store.list()
    }

    pub fn store(&self) -> &EntityStore<WalletTransaction> {
        &self.store
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

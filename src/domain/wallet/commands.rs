use crate::entity_store::RecordId;

use super::value_objects::WalletTransaction;

// ============================================================================
// Wallet Commands - Represent user intent
// ============================================================================

#[derive(Debug, Clone)]
pub enum WalletCommand {
    /// Negative amounts record a debit.
    Credit { transaction: WalletTransaction },
    Remove { transaction_id: RecordId },
}

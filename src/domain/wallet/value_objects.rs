use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entity_store::{is_present, Entity};

// ============================================================================
// Wallet Value Objects
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletTransaction {
    pub date: NaiveDate,
    #[serde(alias = "montant")]
    pub amount: f64,
    pub description: String,
}

impl WalletTransaction {
    pub fn new(date: NaiveDate, amount: f64, description: impl Into<String>) -> Self {
        Self {
            date,
            amount,
            description: description.into(),
        }
    }
}

impl Entity for WalletTransaction {
    const KIND: &'static str = "wallet transaction";

    fn required_fields(&self) -> Vec<(&'static str, bool)> {
        vec![("description", is_present(&self.description))]
    }
}

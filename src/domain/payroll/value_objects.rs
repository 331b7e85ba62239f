use serde::{Deserialize, Serialize};

use crate::entity_store::{is_present, Entity, RecordId};

// ============================================================================
// Payroll Value Objects
// ============================================================================

/// One payment: the amount owed to an agent for a number of days worked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollEntry {
    #[serde(alias = "agentId")]
    pub agent_id: RecordId,
    #[serde(alias = "agentNom")]
    pub agent_name: String,
    #[serde(alias = "joursTravailles")]
    pub days_worked: u32,
    #[serde(alias = "montant")]
    pub amount: f64,
}

impl PayrollEntry {
    pub fn new(agent_id: RecordId, agent_name: impl Into<String>, days_worked: u32, amount: f64) -> Self {
        Self {
            agent_id,
            agent_name: agent_name.into(),
            days_worked,
            amount,
        }
    }

    /// Entry whose amount is `days_worked × daily_rate`
    pub fn at_daily_rate(
        agent_id: RecordId,
        agent_name: impl Into<String>,
        days_worked: u32,
        daily_rate: f64,
    ) -> Self {
        Self::new(agent_id, agent_name, days_worked, f64::from(days_worked) * daily_rate)
    }

    /// Amount per day worked; `None` when no day was worked.
    pub fn daily_rate(&self) -> Option<f64> {
        (self.days_worked > 0).then(|| self.amount / f64::from(self.days_worked))
    }
}

impl Entity for PayrollEntry {
    const KIND: &'static str = "payroll entry";

    fn required_fields(&self) -> Vec<(&'static str, bool)> {
        vec![("agent_name", is_present(&self.agent_name))]
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_from_daily_rate() {
        let entry = PayrollEntry::at_daily_rate(RecordId(1), "Jean Dupont", 20, 100.0);

        assert_eq!(entry.amount, 2000.0);
        assert_eq!(entry.daily_rate(), Some(100.0));
    }

    #[test]
    fn test_no_daily_rate_without_days() {
        let entry = PayrollEntry::new(RecordId(1), "Jean Dupont", 0, 150.0);
        assert_eq!(entry.daily_rate(), None);
    }

    #[test]
    fn test_payroll_entry_reads_page_keys() {
        let json = r#"{"agentId": 2, "agentNom": "Marie Martin", "joursTravailles": 22, "montant": 2200}"#;
        let entry: PayrollEntry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.agent_id, RecordId(2));
        assert_eq!(entry.days_worked, 22);
        assert_eq!(entry.amount, 2200.0);
    }
}

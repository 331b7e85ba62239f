use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::entity_store::{is_present, Entity};

// ============================================================================
// Event Value Objects
// ============================================================================

/// Where an event stands relative to a given day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Upcoming,
    Ongoing,
    Completed,
}

/// A client event staffed by agents
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Event {
    #[serde(alias = "lieu")]
    pub location: String,
    #[serde(alias = "societe")]
    pub company: String,
    #[serde(default)]
    pub agents: Vec<String>,
    #[serde(alias = "codeNom")]
    pub code_name: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

impl Event {
    pub fn new(
        location: impl Into<String>,
        company: impl Into<String>,
        code_name: impl Into<String>,
    ) -> Self {
        Self {
            location: location.into(),
            company: company.into(),
            code_name: code_name.into(),
            ..Self::default()
        }
    }

    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_agents<I, S>(mut self, agents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.agents = agents.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_staffed_by(&self, agent_name: &str) -> bool {
        self.agents.iter().any(|a| a == agent_name)
    }

    /// Events last one day, so an event is ongoing only on its date.
    /// Undated events have no status.
    pub fn status_on(&self, today: NaiveDate) -> Option<EventStatus> {
        self.date.map(|date| match date.cmp(&today) {
            Ordering::Greater => EventStatus::Upcoming,
            Ordering::Equal => EventStatus::Ongoing,
            Ordering::Less => EventStatus::Completed,
        })
    }
}

impl Entity for Event {
    const KIND: &'static str = "event";

    fn required_fields(&self) -> Vec<(&'static str, bool)> {
        vec![
            ("location", is_present(&self.location)),
            ("company", is_present(&self.company)),
            ("code_name", is_present(&self.code_name)),
        ]
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_required_fields() {
        assert!(Event::new("Paris", "Société A", "Alpha").validate().is_ok());

        let err = Event::new("Paris", "Société A", "").validate().unwrap_err();
        assert!(err.to_string().contains("code_name"));
    }

    #[test]
    fn test_status_relative_to_today() {
        let today = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
        let event = Event::new("Paris", "Société A", "Alpha");

        assert_eq!(event.status_on(today), None);
        assert_eq!(
            event.clone().on(today.succ_opt().unwrap()).status_on(today),
            Some(EventStatus::Upcoming)
        );
        assert_eq!(event.clone().on(today).status_on(today), Some(EventStatus::Ongoing));
        assert_eq!(
            event.on(today.pred_opt().unwrap()).status_on(today),
            Some(EventStatus::Completed)
        );
    }

    #[test]
    fn test_event_reads_form_keys() {
        let json = r#"{"lieu": "Lyon", "societe": "Société B", "agents": ["Pierre Durand"], "codeNom": "Beta"}"#;
        let event: Event = serde_json::from_str(json).unwrap();

        assert_eq!(event.code_name, "Beta");
        assert!(event.is_staffed_by("Pierre Durand"));
        assert_eq!(event.date, None);
    }
}

use chrono::NaiveDate;

use crate::entity_store::{EntityStore, Record, RecordId};

use super::commands::EventCommand;
use super::errors::EventError;
use super::value_objects::{Event, EventStatus};

// ============================================================================
// Event Command Handler
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct EventCommandHandler {
    store: EntityStore<Event>,
}

impl EventCommandHandler {
    pub fn new(store: EntityStore<Event>) -> Self {
        Self { store }
    }

    pub fn handle(&mut self, command: EventCommand) -> Result<Option<Record<Event>>, EventError> {
        match command {
            EventCommand::Schedule { event } => Ok(Some(self.store.create(event)?)),
            EventCommand::Cancel { event_id } => {
                self.store.delete(event_id);
                Ok(None)
            }
            EventCommand::AssignAgent {
                event_id,
                agent_name,
            } => {
                let agent_name = agent_name.trim().to_string();
                if agent_name.is_empty() {
                    return Err(EventError::EmptyAgentName);
                }
                // Assigning someone twice leaves the roster as it was.
                let record = self.store.patch(event_id, |mut event| {
                    if !event.is_staffed_by(&agent_name) {
                        event.agents.push(agent_name);
                    }
                    event
                })?;
                Ok(Some(record))
            }
            EventCommand::UnassignAgent {
                event_id,
                agent_name,
            } => {
                let record = self.store.patch(event_id, |mut event| {
                    event.agents.retain(|a| a != agent_name.trim());
                    event
                })?;
                Ok(Some(record))
            }
        }
    }

    /// Dated events in chronological order; undated events are left out.
    pub fn agenda(&self) -> Vec<Record<Event>> {
        let mut dated: Vec<Record<Event>> = self
            .store
            .iter()
            .filter(|r| r.fields.date.is_some())
            .cloned()
            .collect();
        dated.sort_by_key(|r| r.fields.date);
        dated
    }

    /// Number of events with this status on `today`
    pub fn count_with_status(&self, status: EventStatus, today: NaiveDate) -> usize {
        self.store
            .iter()
            .filter(|r| r.fields.status_on(today) == Some(status))
            .count()
    }

    pub fn events_for(&self, agent_name: &str) -> Vec<Record<Event>> {
        self.store
            .iter()
            .filter(|r| r.fields.is_staffed_by(agent_name))
            .cloned()
            .collect()
    }

    pub fn get(&self, event_id: RecordId) -> Option<&Record<Event>> {
        self.store.get(event_id)
    }

    pub fn list(&self) -> Vec<Record<Event>> {
        self.store.list()
    }

    pub fn store(&self) -> &EntityStore<Event> {
        &self.store
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

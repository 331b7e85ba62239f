use crate::entity_store::{EntityStore, Record, RecordId};

use super::commands::AgentCommand;
use super::errors::AgentError;
use super::value_objects::{Agent, MAX_PHOTOS};

// ============================================================================
// Agent Command Handler
// ============================================================================
//
// Orchestrates: Command → Validation → Entity Store
//
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct AgentCommandHandler {
    store: EntityStore<Agent>,
}

impl AgentCommandHandler {
    pub fn new(store: EntityStore<Agent>) -> Self {
        Self { store }
    }

    /// Handle a command against the roster.
    ///
    /// Returns the record as it stands afterwards, or `None` when it was removed.
    pub fn handle(&mut self, command: AgentCommand) -> Result<Option<Record<Agent>>, AgentError> {
        match command {
            AgentCommand::Register { agent } => Ok(Some(self.store.create(agent)?)),
            AgentCommand::Remove { agent_id } => {
                self.store.delete(agent_id);
                Ok(None)
            }
            AgentCommand::UpdateProfile {
                agent_id,
                field,
                value,
            } => {
                let current = self.store.require(agent_id)?.fields.clone();
                let updated = field.apply(current, value)?;
                tracing::debug!(%agent_id, %field, "profile field updated");
                Ok(Some(self.store.patch(agent_id, |_| updated)?))
            }
            AgentCommand::AddPhoto { agent_id, url } => {
                if url.trim().is_empty() {
                    return Err(AgentError::EmptyPhoto);
                }
                if !self.store.require(agent_id)?.fields.can_add_photo() {
                    return Err(AgentError::PhotoLimitReached {
                        agent_id,
                        limit: MAX_PHOTOS,
                    });
                }
                let record = self.store.patch(agent_id, |mut agent| {
                    agent.photos.push(url);
                    agent
                })?;
                Ok(Some(record))
            }
        }
    }

    pub fn get(&self, agent_id: RecordId) -> Option<&Record<Agent>> {
        self.store.get(agent_id)
    }

    pub fn list(&self) -> Vec<Record<Agent>> {
        self.store.list()
    }

    pub fn store(&self) -> &EntityStore<Agent> {
        &self.store
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

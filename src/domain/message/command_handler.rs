use crate::entity_store::{EntityStore, Record, StoreError};

use super::commands::MessageCommand;
use super::value_objects::Message;

// ============================================================================
// Message Command Handler
// ============================================================================

#[derive(Debug, Clone)]
pub struct MessageCommandHandler {
    store: EntityStore<Message>,
    current_user: String,
}

impl MessageCommandHandler {
    pub fn new(store: EntityStore<Message>, current_user: impl Into<String>) -> Self {
        Self {
            store,
            current_user: current_user.into(),
        }
    }

    pub fn handle(&mut self, command: MessageCommand) -> Result<Record<Message>, StoreError> {
        match command {
            MessageCommand::Send {
                to,
                content,
                sent_at,
            } => self.store.create(Message {
                from: self.current_user.clone(),
                to,
                content,
                sent_at,
            }),
        }
    }

    /// Messages exchanged with `peer`, oldest first
    pub fn conversation_with(&self, peer: &str) -> Vec<Record<Message>> {
        let mut thread: Vec<Record<Message>> = self
            .store
            .iter()
            .filter(|r| r.fields.involves(peer))
            .cloned()
            .collect();
        thread.sort_by_key(|r| r.fields.sent_at);
        thread
    }

    pub fn current_user(&self) -> &str {
        &self.current_user
    }

    pub fn list(&self) -> Vec<Record<Message>> {
        self.store.list()
    }

    pub fn store(&self) -> &EntityStore<Message> {
        &self.store
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

use crate::entity_store::{EntityStore, Record, RecordId, StoreError};

use super::commands::NotificationCommand;
use super::value_objects::Notification;

// ============================================================================
// Notification Command Handler
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct NotificationCommandHandler {
    store: EntityStore<Notification>,
}

impl NotificationCommandHandler {
    pub fn new(store: EntityStore<Notification>) -> Self {
        Self { store }
    }

    /// Returns the records the command touched.
    pub fn handle(
        &mut self,
        command: NotificationCommand,
    ) -> Result<Vec<Record<Notification>>, StoreError> {
        match command {
            NotificationCommand::Push { notification } => {
                Ok(vec![self.store.create(notification)?])
            }
            NotificationCommand::MarkAsRead { notification_id } => {
                Ok(vec![self.store.patch(notification_id, Notification::mark_read)?])
            }
            NotificationCommand::MarkAllAsRead => {
                let unread: Vec<RecordId> = self
                    .store
                    .iter()
                    .filter(|r| !r.fields.read)
                    .map(|r| r.id)
                    .collect();
                unread
                    .into_iter()
                    .map(|id| self.store.patch(id, Notification::mark_read))
                    .collect()
            }
        }
    }

    pub fn unread_count(&self) -> usize {
        self.store.iter().filter(|r| !r.fields.read).count()
    }

    pub fn list(&self) -> Vec<Record<Notification>> {
        self.store.list()
    }

    pub fn store(&self) -> &EntityStore<Notification> {
        &self.store
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

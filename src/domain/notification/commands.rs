use crate::entity_store::RecordId;

use super::value_objects::Notification;

// ============================================================================
// Notification Commands - Represent user intent
// ============================================================================

#[derive(Debug, Clone)]
pub enum NotificationCommand {
    Push { notification: Notification },
    MarkAsRead { notification_id: RecordId },
    MarkAllAsRead,
}

use chrono::NaiveDateTime;

// ============================================================================
// Message Commands - Represent user intent
// ============================================================================

#[derive(Debug, Clone)]
pub enum MessageCommand {
    /// Sent on behalf of the session's current user.
    Send {
        to: String,
        content: String,
        sent_at: NaiveDateTime,
    },
}

// ============================================================================
// Entity Store Core - Generic Record Abstractions
// ============================================================================
//
// Key Principles:
// - No domain-specific code (no Agent, Event, Payroll, etc.)
// - Generic over the stored field type
// - Identifiers are owned by the store, never by callers
//
// ============================================================================

pub mod entity;
pub mod errors;
pub mod record;

pub use entity::{is_present, Entity};
pub use errors::StoreError;
pub use record::{Record, RecordId};

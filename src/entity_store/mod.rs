// ============================================================================
// Entity Store Infrastructure
// ============================================================================
//
// Generic, reusable in-memory record storage.
// Domain-specific code is in src/domain/
//
// ============================================================================

// Core abstractions (GENERIC - works with any entity)
mod core;
mod store;

// Re-export core infrastructure
pub use self::core::*;
pub use self::store::*;

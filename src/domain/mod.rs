// ============================================================================
// Domain Layer - Back-Office Business Logic
// ============================================================================
//
// This module contains entity-specific value objects and handlers.
// Each entity has its own subdirectory with:
// - Value objects (the fields kept in the store)
// - Commands
// - Errors, where the entity has rules beyond presence checks
// - Command handler (owns one EntityStore)
//
// This layer is completely separate from the entity store infrastructure.
//
// ============================================================================

pub mod agent;
pub mod attendance;
pub mod evaluation;
pub mod event;
pub mod message;
pub mod notification;
pub mod payroll;
pub mod wallet;

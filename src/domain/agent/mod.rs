// ============================================================================
// Agent Domain - Roster and Profile Management
// ============================================================================
//
// This module contains ALL Agent-specific code:
// - Value objects (Agent, PhoneNumber, ProfileField)
// - Commands (Register, Remove, UpdateProfile, AddPhoto)
// - Errors (AgentError enum)
// - Command Handler (AgentCommandHandler, owns the agent store)
//
// ============================================================================

pub mod value_objects;
pub mod commands;
pub mod errors;
pub mod command_handler;

// Re-export for convenience
pub use value_objects::*;
pub use commands::*;
pub use errors::*;
pub use command_handler::*;

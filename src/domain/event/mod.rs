// ============================================================================
// Event Domain - Staffed Client Events and the Agent Agenda
// ============================================================================

pub mod value_objects;
pub mod commands;
pub mod errors;
pub mod command_handler;

pub use value_objects::*;
pub use commands::*;
pub use errors::*;
pub use command_handler::*;

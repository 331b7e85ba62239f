// ============================================================================
// Message Domain - Direct Messages Between Agents and the Office
// ============================================================================

pub mod value_objects;
pub mod commands;
pub mod command_handler;

pub use value_objects::*;
pub use commands::*;
pub use command_handler::*;

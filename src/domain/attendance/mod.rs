// ============================================================================
// Attendance Domain - Declared Presence and Its Review
// ============================================================================

pub mod value_objects;
pub mod commands;
pub mod command_handler;

pub use value_objects::*;
pub use commands::*;
pub use command_handler::*;

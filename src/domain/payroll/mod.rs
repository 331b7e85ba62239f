// ============================================================================
// Payroll Domain - Pay Entries per Agent
// ============================================================================

pub mod value_objects;
pub mod commands;
pub mod command_handler;

pub use value_objects::*;
pub use commands::*;
pub use command_handler::*;

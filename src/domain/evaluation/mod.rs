// ============================================================================
// Evaluation Domain - Event Performance and Monthly Rankings
// ============================================================================
//
// - Value objects (EventPerformance, Satisfaction, Month)
// - Commands (Record, Revise, Remove)
// - Errors (EvaluationError enum)
// - Command Handler (owns the performance store)
// - Report (per-agent monthly summary, read-only over the other stores)
//
// ============================================================================

pub mod value_objects;
pub mod commands;
pub mod errors;
pub mod command_handler;
pub mod report;

pub use value_objects::*;
pub use commands::*;
pub use errors::*;
pub use command_handler::*;
pub use report::*;

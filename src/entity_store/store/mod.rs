// ============================================================================
// Entity Store - In-Memory Storage
// ============================================================================

pub mod entity_store;
pub mod id_generator;

pub use entity_store::EntityStore;
pub use id_generator::IdGenerator;

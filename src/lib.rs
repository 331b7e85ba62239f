//! In-memory entity stores for an agent-management back office.
//!
//! Every page of the back office (agents, events, payroll, attendance,
//! notifications, messages, wallet, event evaluations) works on one
//! [`entity_store::EntityStore`]: an insertion-ordered list of records whose ids
//! are generated by the store and never reused. A [`session::Session`] owns one
//! store per entity type and computes the dashboard and monthly rankings from them.
//!
//! ```
//! use nva_agents::domain::agent::{Agent, AgentCommand};
//! use nva_agents::{config::AppConfig, seed::SeedData, session::Session};
//! use nva_agents::entity_store::RecordId;
//!
//! let mut session = Session::start(&AppConfig::default(), SeedData::default()).unwrap();
//! session.agents.handle(AgentCommand::Remove { agent_id: RecordId(1) }).unwrap();
//! let created = session
//!     .agents
//!     .handle(AgentCommand::Register { agent: Agent::new("Durand", "Pierre") })
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(created.id, RecordId(3));
//! ```

pub mod config;
pub mod domain;
pub mod entity_store;
pub mod seed;
pub mod session;

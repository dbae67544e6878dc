//! Belief maintenance and the per-tick decision policy

pub mod belief;
pub mod percept;
pub mod policy;
pub mod session;

pub use belief::{BeliefState, History};
pub use session::AgentSession;

//! Wumpus Scout - knowledge-based hazard-avoidance agent
//!
//! Each tick the agent receives a set of sensory symbols (bump, breeze,
//! stench, kill confirmation) and emits exactly one action: a directional
//! move or a directional shot. It has no coordinates; safety and blockage
//! are inferred from accumulated percept history held in a symbolic
//! knowledge base.

pub mod agent;
pub mod core;
pub mod kb;

pub use agent::{AgentSession, BeliefState};
pub use crate::core::config::AgentConfig;
pub use crate::core::error::{Result, ScoutError};
pub use crate::core::types::{Action, Direction, Percept, PerceptSet, Position};

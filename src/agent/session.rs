//! Agent session: one knowledge base plus one belief state
//!
//! An explicit session object rather than a process-wide singleton, so tests
//! and harnesses can run several independent agents in one process. Access
//! is synchronous call-and-return; callers that share a session across
//! threads must serialize it themselves.

use crate::agent::belief::BeliefState;
use crate::agent::{percept, policy};
use crate::core::config::AgentConfig;
use crate::core::error::Result;
use crate::core::types::{Action, PerceptSet};
use crate::kb::store::FactStore;

pub struct AgentSession {
    kb: FactStore,
    beliefs: BeliefState,
}

impl AgentSession {
    pub fn new() -> Result<Self> {
        Self::with_config(AgentConfig::default())
    }

    pub fn with_config(config: AgentConfig) -> Result<Self> {
        Ok(Self {
            kb: FactStore::new(config.max_chain_iterations)?,
            beliefs: BeliefState::new(&config),
        })
    }

    /// The per-tick entry point: absorb one percept set, emit one action
    pub fn decide(&mut self, percepts: &PerceptSet) -> Result<Action> {
        tracing::debug!(tick = self.beliefs.moves_taken, ?percepts, "processing percepts");
        percept::absorb(percepts, &mut self.beliefs, &mut self.kb)?;
        let action = policy::select(percepts, &mut self.beliefs, &self.kb)?;
        self.beliefs.moves_taken += 1;
        tracing::debug!(action = %action, "decided");
        Ok(action)
    }

    pub fn beliefs(&self) -> &BeliefState {
        &self.beliefs
    }

    pub fn kb(&self) -> &FactStore {
        &self.kb
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Direction, Position};

    #[test]
    fn test_sessions_are_independent() {
        let mut first = AgentSession::new().unwrap();
        let mut second = AgentSession::new().unwrap();

        first.decide(&PerceptSet::empty()).unwrap();
        let bump = PerceptSet {
            bump: true,
            ..PerceptSet::empty()
        };
        first.decide(&bump).unwrap();

        assert!(first.beliefs().blocked.contains(&Direction::North));
        assert!(second.beliefs().blocked.is_empty());
        second.decide(&PerceptSet::empty()).unwrap();
        assert_eq!(second.beliefs().last_move, Some(Direction::North));
    }

    #[test]
    fn test_kb_accessor_agrees_with_belief_caches() {
        use crate::kb::fact::{Atom, Pred};

        let mut session = AgentSession::new().unwrap();
        session.decide(&PerceptSet::empty()).unwrap();
        let bump = PerceptSet {
            bump: true,
            ..PerceptSet::empty()
        };
        session.decide(&bump).unwrap();

        // A harness inspecting the store must see the same picture the
        // belief caches hold.
        let kb = session.kb();
        assert!(kb
            .query(&Atom::unary(Pred::BlockedDirection, Direction::North))
            .unwrap());
        assert!(kb
            .query(&Atom::unary(Pred::WallFound, Direction::North))
            .unwrap());
        assert!(session.beliefs().blocked.contains(&Direction::North));
    }

    #[test]
    fn test_decide_counts_ticks() {
        let mut session = AgentSession::new().unwrap();
        for _ in 0..4 {
            session.decide(&PerceptSet::empty()).unwrap();
        }
        assert_eq!(session.beliefs().moves_taken, 4);
    }

    #[test]
    fn test_current_position_stays_visited_and_safe() {
        let mut session = AgentSession::new().unwrap();
        session.decide(&PerceptSet::empty()).unwrap();
        session.decide(&PerceptSet::empty()).unwrap();

        let beliefs = session.beliefs();
        assert!(beliefs.visited.contains(&Position::Here));
        assert!(beliefs.safe.contains(&Position::Here));
        assert!(beliefs.visited.contains(&beliefs.current_position));
        assert!(beliefs.safe.contains(&beliefs.current_position));
    }
}

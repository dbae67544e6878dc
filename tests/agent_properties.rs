//! Property tests: invariants that must hold for any percept stream

use proptest::prelude::*;
use wumpus_scout::core::types::{PerceptSet, Position};
use wumpus_scout::AgentSession;

fn percept_set() -> impl Strategy<Value = PerceptSet> {
    (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(bump, breeze, stench, kill)| PerceptSet {
            bump,
            breeze,
            stench,
            kill,
        },
    )
}

proptest! {
    #[test]
    fn decide_always_returns_a_valid_action_code(
        stream in proptest::collection::vec(percept_set(), 1..50)
    ) {
        let mut session = AgentSession::new().unwrap();
        for percepts in &stream {
            let action = session.decide(percepts).unwrap();
            let code = action.code();
            prop_assert!(
                matches!(code.as_str(), "N" | "E" | "S" | "W" | "FN" | "FE" | "FS" | "FW"),
                "unexpected action code {code}"
            );
        }
    }

    #[test]
    fn histories_never_exceed_capacity(
        stream in proptest::collection::vec(percept_set(), 1..80)
    ) {
        let mut session = AgentSession::new().unwrap();
        for percepts in &stream {
            session.decide(percepts).unwrap();
            prop_assert!(session.beliefs().move_history.len() <= 20);
            prop_assert!(session.beliefs().safe_history.len() <= 20);
        }
    }

    #[test]
    fn start_square_stays_visited_and_safe(
        stream in proptest::collection::vec(percept_set(), 1..50)
    ) {
        let mut session = AgentSession::new().unwrap();
        for percepts in &stream {
            session.decide(percepts).unwrap();
            let beliefs = session.beliefs();
            prop_assert!(beliefs.visited.contains(&Position::Here));
            prop_assert!(beliefs.safe.contains(&Position::Here));
            prop_assert!(beliefs.visited.contains(&beliefs.current_position));
        }
    }
}

//! Percept interpretation: folds one tick of sensing into beliefs and facts
//!
//! Processing is strictly ordered. A bump (with a pending move) preempts the
//! whole tick; otherwise position confirmation runs first, then the safety,
//! breeze, stench, and kill updates, which are independent of each other.

use crate::agent::belief::BeliefState;
use crate::core::error::Result;
use crate::core::types::{Percept, PerceptSet, Position};
use crate::kb::fact::{Atom, Pred};
use crate::kb::store::FactStore;

pub fn absorb(percepts: &PerceptSet, beliefs: &mut BeliefState, kb: &mut FactStore) -> Result<()> {
    // Bump: highest priority and exclusive. Nothing else is evaluated this
    // tick once a failed move is recorded.
    if percepts.contains(Percept::Bump) {
        if let Some(dir) = beliefs.last_move {
            tracing::debug!(direction = %dir, "bump: wall detected");
            kb.assert_fact(Atom::unary(Pred::WallFound, dir))?;
            kb.assert_fact(Atom::unary(Pred::BlockedDirection, dir))?;
            beliefs.blocked.insert(dir);
            beliefs.last_bump_direction = Some(dir);

            for alt in beliefs.alternatives(dir) {
                kb.assert_fact(Atom::binary(Pred::NotOpposite, dir, alt))?;
                kb.assert_fact(Atom::binary(Pred::AlternativeDirection, dir, alt))?;
            }
            return Ok(());
        }
    }

    // No bump means the pending move succeeded.
    if !percepts.contains(Percept::Bump) {
        if let Some(dir) = beliefs.last_move {
            let arrived = Position::At(dir);
            tracing::debug!(position = %arrived, "move confirmed");
            beliefs.current_position = arrived;
            kb.assert_fact(Atom::unary(Pred::AgentAt, arrived))?;
            kb.assert_fact(Atom::unary(Pred::VisitedSquare, arrived))?;
            kb.assert_fact(Atom::unary(Pred::LastVisited, arrived))?;
            beliefs.visited.insert(arrived);
            beliefs.move_history.push(arrived);
            beliefs.last_bump_direction = None;
        }
    }

    // Absence of both hazard percepts confirms the square fully safe.
    if !percepts.contains(Percept::Breeze) && !percepts.contains(Percept::Stench) {
        let here = beliefs.current_position;
        kb.assert_fact(Atom::unary(Pred::NoBreeze, here))?;
        kb.assert_fact(Atom::unary(Pred::SafeSquare, here))?;
        kb.assert_fact(Atom::unary(Pred::FullySafe, here))?;
        beliefs.safe.insert(here);
        beliefs.safe_history.push(here);
        beliefs.last_safe_position = here;
    }

    if percepts.contains(Percept::Breeze) {
        let here = beliefs.current_position;
        tracing::debug!(position = %here, "breeze detected");
        kb.assert_fact(Atom::unary(Pred::BreezePresent, here))?;
        beliefs.breeze_locations.insert(here);
    }

    if percepts.contains(Percept::Stench) {
        let here = beliefs.current_position;
        // A stench at a new position starts a fresh shooting episode.
        if beliefs.last_stench_location != Some(here) {
            beliefs.last_stench_location = Some(here);
            beliefs.shot_directions.clear();
        }
        tracing::debug!(position = %here, "stench detected");
        kb.assert_fact(Atom::unary(Pred::StenchPresent, here))?;
    }

    if percepts.contains(Percept::Kill) {
        tracing::info!("wumpus kill confirmed");
        kb.assert_fact(Atom::nullary(Pred::WumpusKilled))?;
        beliefs.kill_count += 1;
    }

    Ok(())
}

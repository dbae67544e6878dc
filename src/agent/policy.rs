//! Move selection - the heart of the agent's behavior
//!
//! A fixed six-step cascade evaluated top to bottom; the first matching rule
//! wins. Every scan over directions walks the current move order front to
//! back, so the policy is deterministic for identical beliefs and percepts.

use crate::agent::belief::BeliefState;
use crate::core::error::{Result, ScoutError};
use crate::core::types::{Action, Direction, Percept, PerceptSet, Position};
use crate::kb::fact::{Atom, Pred};
use crate::kb::store::FactStore;

/// Pick exactly one action for this tick
///
/// The cascade:
/// 1. Shoot at an unshot, unblocked direction while a stench persists
/// 2. Sidestep after a bump via an alternative direction
/// 3. Retreat from a breeze back toward the last safe square
/// 4. Take the first safe unexplored move the knowledge base allows
/// 5. Take any unblocked move
/// 6. Deadlock reset: forget blockages and restart with a fresh move order
pub fn select(
    percepts: &PerceptSet,
    beliefs: &mut BeliefState,
    kb: &FactStore,
) -> Result<Action> {
    // 1. Shoot on stench. Move state is untouched: shooting does not change
    // where the agent stands or where it last tried to go.
    if percepts.contains(Percept::Stench) {
        let target = beliefs
            .move_order
            .iter()
            .copied()
            .find(|dir| !beliefs.blocked.contains(dir) && !beliefs.shot_directions.contains(dir));
        if let Some(dir) = target {
            beliefs.shot_directions.insert(dir);
            tracing::debug!(direction = %dir, "shooting at stench");
            return Ok(Action::Shoot(dir));
        }
    }

    // 2. Recover from a bump by sidestepping the blocked direction.
    if let Some(bumped) = beliefs.last_bump_direction {
        let sidestep = beliefs
            .alternatives(bumped)
            .into_iter()
            .find(|dir| !beliefs.blocked.contains(dir));
        if let Some(dir) = sidestep {
            tracing::debug!(direction = %dir, "sidestepping after bump");
            beliefs.last_move = Some(dir);
            return Ok(Action::Move(dir));
        }
    }

    // 3. Retreat on breeze, unless already standing on the last safe square.
    if percepts.contains(Percept::Breeze) && beliefs.current_position != beliefs.last_safe_position
    {
        if let Some(back) = beliefs.last_move.map(Direction::opposite) {
            if !beliefs.blocked.contains(&back) {
                tracing::debug!(direction = %back, "retreating from breeze");
                beliefs.last_move = Some(back);
                return Ok(Action::Move(back));
            }
        }
    }

    // 4. Safe unexplored move: unblocked, unvisited label, and the oracle
    // confirms it as a possible move.
    for dir in beliefs.move_order {
        if !beliefs.blocked.contains(&dir)
            && !beliefs.visited.contains(&Position::At(dir))
            && kb.query(&Atom::unary(Pred::PossibleMove, dir))?
        {
            tracing::debug!(direction = %dir, "taking safe unexplored move");
            beliefs.last_move = Some(dir);
            return Ok(Action::Move(dir));
        }
    }

    // 5. Any unblocked move.
    for dir in beliefs.move_order {
        if !beliefs.blocked.contains(&dir) {
            tracing::debug!(direction = %dir, "taking available move");
            beliefs.last_move = Some(dir);
            return Ok(Action::Move(dir));
        }
    }

    // 6. Deadlock: every direction is blocked. Forget the blockages and
    // restart with the alternate order.
    tracing::warn!("all directions blocked, resetting");
    beliefs.blocked.clear();
    beliefs.move_order = beliefs.reset_move_order;
    let restart = beliefs
        .move_order
        .first()
        .copied()
        .ok_or(ScoutError::NoActionAvailable)?;
    beliefs.last_move = Some(restart);
    Ok(Action::Move(restart))
}

//! Agent configuration with documented constants
//!
//! All tuning values are collected here with explanations of their purpose
//! and how they interact with each other.

use crate::core::types::Direction;

/// Configuration for one agent session
///
/// Changing these values changes exploration order and memory depth.
#[derive(Debug, Clone)]
pub struct AgentConfig {
    /// Capacity of the move and safe-position histories
    ///
    /// Oldest entries are evicted first once the bound is reached. The
    /// histories are diagnostic memory only; the decision cascade never
    /// reads beyond the most recent entry.
    pub history_capacity: usize,

    /// Tie-break order used by the decision cascade
    ///
    /// Every scan over candidate directions walks this sequence front to
    /// back, which is what makes the policy deterministic.
    pub move_order: [Direction; 4],

    /// Replacement tie-break order installed by the deadlock reset
    ///
    /// Rotated one step from the initial order so the first move after a
    /// reset differs from the move that led into the deadlock.
    pub reset_move_order: [Direction; 4],

    /// Iteration cap for forward-chaining saturation
    ///
    /// The fixed rule set over five symbols converges in a handful of
    /// passes; exceeding the cap indicates an integration fault and is
    /// surfaced as a query error.
    pub max_chain_iterations: usize,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            history_capacity: 20,
            move_order: [
                Direction::North,
                Direction::East,
                Direction::South,
                Direction::West,
            ],
            reset_move_order: [
                Direction::East,
                Direction::South,
                Direction::West,
                Direction::North,
            ],
            max_chain_iterations: 64,
        }
    }
}

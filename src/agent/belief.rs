//! Belief state: fast-access caches derived from the knowledge base
//!
//! Every field here is a cache of something the fact store also knows (or
//! could derive). Percept processing updates both in the same pass, so the
//! caches never contradict the latest asserted facts.

use crate::core::config::AgentConfig;
use crate::core::types::{Direction, Position, Tick};
use ahash::AHashSet;
use std::collections::VecDeque;

/// Fixed-capacity ordered history; oldest entries are evicted first
#[derive(Debug, Clone)]
pub struct History<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> History<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, item: T) {
        if self.items.len() == self.capacity {
            self.items.pop_front();
        }
        self.items.push_back(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn latest(&self) -> Option<&T> {
        self.items.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

/// Everything the decision cascade reads, kept in lockstep with the fact
/// store by percept processing
#[derive(Debug, Clone)]
pub struct BeliefState {
    pub current_position: Position,
    pub last_move: Option<Direction>,
    pub last_bump_direction: Option<Direction>,
    pub last_safe_position: Position,
    pub last_stench_location: Option<Position>,

    pub visited: AHashSet<Position>,
    pub safe: AHashSet<Position>,
    pub blocked: AHashSet<Direction>,
    pub breeze_locations: AHashSet<Position>,
    /// Directions already fired at for the current stench episode; cleared
    /// when the stench-triggering position changes
    pub shot_directions: AHashSet<Direction>,

    pub move_history: History<Position>,
    pub safe_history: History<Position>,

    /// Tie-break order for every directional scan; replaced on deadlock reset
    pub move_order: [Direction; 4],
    /// The order installed by a deadlock reset
    pub reset_move_order: [Direction; 4],

    pub kill_count: u32,
    pub moves_taken: Tick,
}

impl BeliefState {
    pub fn new(config: &AgentConfig) -> Self {
        let mut visited = AHashSet::new();
        visited.insert(Position::Here);
        let mut safe = AHashSet::new();
        safe.insert(Position::Here);

        Self {
            current_position: Position::Here,
            last_move: None,
            last_bump_direction: None,
            last_safe_position: Position::Here,
            last_stench_location: None,
            visited,
            safe,
            blocked: AHashSet::new(),
            breeze_locations: AHashSet::new(),
            shot_directions: AHashSet::new(),
            move_history: History::new(config.history_capacity),
            safe_history: History::new(config.history_capacity),
            move_order: config.move_order,
            reset_move_order: config.reset_move_order,
            kill_count: 0,
            moves_taken: 0,
        }
    }

    /// Alternatives to a blocked direction: every direction in move-order
    /// sequence that is neither the blocked direction nor its opposite
    pub fn alternatives(&self, blocked: Direction) -> Vec<Direction> {
        self.move_order
            .iter()
            .copied()
            .filter(|&dir| dir != blocked && dir != blocked.opposite())
            .collect()
    }
}

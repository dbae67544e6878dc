//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::fmt;

/// Game tick counter (one percept/action exchange per tick)
pub type Tick = u64;

/// One of the four cardinal movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All directions in the default tie-break order
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Single-letter action code for this direction
    pub fn letter(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::East => 'E',
            Direction::South => 'S',
            Direction::West => 'W',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::North => "North",
            Direction::East => "East",
            Direction::South => "South",
            Direction::West => "West",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Symbolic location label
///
/// The agent has no coordinates. `Here` is the starting label; moving in
/// direction D lands on the label `At(D)` regardless of the path taken, so
/// distinct real-world cells reached via the same direction share one label.
/// This aliasing is part of the model, not something to fix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    Here,
    At(Direction),
}

impl Position {
    pub fn name(self) -> &'static str {
        match self {
            Position::Here => "Here",
            Position::At(dir) => dir.name(),
        }
    }
}

impl From<Direction> for Position {
    fn from(dir: Direction) -> Self {
        Position::At(dir)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One sensory symbol received at the start of a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Percept {
    /// Last attempted move hit an obstacle
    Bump,
    /// Pit nearby
    Breeze,
    /// Wumpus nearby
    Stench,
    /// A fired shot connected
    Kill,
}

impl Percept {
    /// Parse one wire symbol. Unknown symbols yield `None` and are ignored
    /// by the caller so the agent stays responsive under noisy sensing.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'O' => Some(Percept::Bump),
            'B' => Some(Percept::Breeze),
            'S' => Some(Percept::Stench),
            'Y' => Some(Percept::Kill),
            _ => None,
        }
    }
}

/// The set of percepts delivered in a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerceptSet {
    pub bump: bool,
    pub breeze: bool,
    pub stench: bool,
    pub kill: bool,
}

impl PerceptSet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn contains(&self, percept: Percept) -> bool {
        match percept {
            Percept::Bump => self.bump,
            Percept::Breeze => self.breeze,
            Percept::Stench => self.stench,
            Percept::Kill => self.kill,
        }
    }

    pub fn insert(&mut self, percept: Percept) {
        match percept {
            Percept::Bump => self.bump = true,
            Percept::Breeze => self.breeze = true,
            Percept::Stench => self.stench = true,
            Percept::Kill => self.kill = true,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.bump || self.breeze || self.stench || self.kill)
    }

    /// Parse a whitespace-separated line of wire symbols, ignoring any
    /// character that is not a recognized percept
    pub fn parse_symbols(line: &str) -> Self {
        line.split_whitespace()
            .flat_map(|token| token.chars())
            .filter_map(Percept::from_symbol)
            .collect()
    }
}

impl FromIterator<Percept> for PerceptSet {
    fn from_iter<I: IntoIterator<Item = Percept>>(iter: I) -> Self {
        let mut set = PerceptSet::empty();
        for percept in iter {
            set.insert(percept);
        }
        set
    }
}

/// The single action emitted per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Move(Direction),
    Shoot(Direction),
}

impl Action {
    /// Wire encoding: 'N'/'E'/'S'/'W' for moves, "FN"/"FE"/"FS"/"FW" for shots
    pub fn code(&self) -> String {
        match self {
            Action::Move(dir) => dir.letter().to_string(),
            Action::Shoot(dir) => format!("F{}", dir.letter()),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code())
    }
}

//! Vocabulary of the knowledge base: symbols, terms, and atoms

use crate::core::types::{Direction, Position};
use std::fmt;

/// Constant symbols of the closed domain
///
/// Direction names double as location labels, mirroring the symbolic
/// position model: "having moved North" and "the square North" share the
/// symbol `North`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    Here,
    North,
    East,
    South,
    West,
}

impl Symbol {
    pub const ALL: [Symbol; 5] = [
        Symbol::Here,
        Symbol::North,
        Symbol::East,
        Symbol::South,
        Symbol::West,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Symbol::Here => "Here",
            Symbol::North => "North",
            Symbol::East => "East",
            Symbol::South => "South",
            Symbol::West => "West",
        }
    }
}

impl From<Direction> for Symbol {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::North => Symbol::North,
            Direction::East => Symbol::East,
            Direction::South => Symbol::South,
            Direction::West => Symbol::West,
        }
    }
}

impl From<Position> for Symbol {
    fn from(pos: Position) -> Self {
        match pos {
            Position::Here => Symbol::Here,
            Position::At(dir) => dir.into(),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Predicate alphabet
///
/// Closed set: the rule base is fixed at construction and never extended at
/// runtime, so there is no string-keyed predicate table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pred {
    Location,
    Direction,
    AgentAt,
    SafeSquare,
    VisitedSquare,
    KnownSafe,
    AdjacentSquares,
    MovementOption,
    PossibleMove,
    WallFound,
    BlockedDirection,
    NotOpposite,
    TryAlternative,
    OppositeDirection,
    AlternativeDirection,
    BreezePresent,
    NoBreeze,
    StenchPresent,
    FullySafe,
    SafeButDangerous,
    PreferredSquare,
    BacktrackOption,
    ReturnMove,
    LastVisited,
    WumpusKilled,
}

/// A term: either a constant symbol or a rule variable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Term {
    Sym(Symbol),
    Var(&'static str),
}

impl Term {
    pub fn is_ground(&self) -> bool {
        matches!(self, Term::Sym(_))
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Sym(sym) => write!(f, "{sym}"),
            Term::Var(name) => write!(f, "{name}"),
        }
    }
}

impl From<Symbol> for Term {
    fn from(sym: Symbol) -> Self {
        Term::Sym(sym)
    }
}

impl From<Direction> for Term {
    fn from(dir: Direction) -> Self {
        Term::Sym(dir.into())
    }
}

impl From<Position> for Term {
    fn from(pos: Position) -> Self {
        Term::Sym(pos.into())
    }
}

/// A predicate applied to its arguments
///
/// Ground atoms are facts; atoms with variables appear in rule bodies, rule
/// heads, and existential queries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Atom {
    pub pred: Pred,
    pub args: Vec<Term>,
}

impl Atom {
    pub fn nullary(pred: Pred) -> Self {
        Self { pred, args: vec![] }
    }

    pub fn unary(pred: Pred, arg: impl Into<Term>) -> Self {
        Self {
            pred,
            args: vec![arg.into()],
        }
    }

    pub fn binary(pred: Pred, first: impl Into<Term>, second: impl Into<Term>) -> Self {
        Self {
            pred,
            args: vec![first.into(), second.into()],
        }
    }

    pub fn is_ground(&self) -> bool {
        self.args.iter().all(Term::is_ground)
    }

    /// Variable names occurring in this atom, in argument order
    pub fn variables(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.args.iter().filter_map(|term| match term {
            Term::Var(name) => Some(*name),
            Term::Sym(_) => None,
        })
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}(", self.pred)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{arg}")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_alphabet_covers_start_and_directions() {
        use crate::core::types::{Direction, Position};

        assert!(Symbol::ALL.contains(&Symbol::from(Position::Here)));
        for dir in Direction::ALL {
            assert!(Symbol::ALL.contains(&Symbol::from(dir)));
        }
        // Names are the labels facts are rendered with; they must be unique.
        let names: Vec<&str> = Symbol::ALL.iter().map(|sym| sym.name()).collect();
        for (i, name) in names.iter().enumerate() {
            assert!(!names[i + 1..].contains(name));
        }
    }

    #[test]
    fn test_ground_detection() {
        let ground = Atom::unary(Pred::SafeSquare, Symbol::Here);
        let open = Atom::unary(Pred::PossibleMove, Term::Var("d"));
        assert!(ground.is_ground());
        assert!(!open.is_ground());
    }

    #[test]
    fn test_display_matches_logical_notation() {
        let atom = Atom::binary(Pred::AdjacentSquares, Symbol::Here, Symbol::North);
        assert_eq!(atom.to_string(), "AdjacentSquares(Here, North)");
    }
}

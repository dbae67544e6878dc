//! The fixed rule set and seed facts of the agent's knowledge base
//!
//! Declarative and append-only: rules are installed once at construction and
//! never retracted. Head variables must be bound by the body (range
//! restriction), which the store validates before accepting a rule set.

use crate::core::types::Direction;
use crate::kb::fact::{Atom, Pred, Symbol, Term};

/// A definite clause: the head holds whenever every body atom holds
#[derive(Debug, Clone)]
pub struct Rule {
    pub head: Atom,
    pub body: Vec<Atom>,
}

impl Rule {
    pub fn new(head: Atom, body: Vec<Atom>) -> Self {
        Self { head, body }
    }
}

fn var(name: &'static str) -> Term {
    Term::Var(name)
}

/// Base facts seeded before the first tick: the start square is a known-safe
/// visited location, and each direction is a location, a direction, adjacent
/// to the start, and a movement option.
pub fn base_facts() -> Vec<Atom> {
    let mut facts = vec![
        Atom::unary(Pred::Location, Symbol::Here),
        Atom::unary(Pred::AgentAt, Symbol::Here),
        Atom::unary(Pred::SafeSquare, Symbol::Here),
        Atom::unary(Pred::VisitedSquare, Symbol::Here),
        Atom::unary(Pred::KnownSafe, Symbol::Here),
    ];
    for dir in Direction::ALL {
        facts.push(Atom::unary(Pred::Location, dir));
        facts.push(Atom::unary(Pred::Direction, dir));
        facts.push(Atom::binary(Pred::AdjacentSquares, Symbol::Here, dir));
        facts.push(Atom::unary(Pred::MovementOption, dir));
    }
    facts
}

/// The full rule set: movement, opposites, alternatives, safety grading,
/// and backtracking.
pub fn rule_set() -> Vec<Rule> {
    let mut rules = vec![
        // Movement
        Rule::new(
            Atom::unary(Pred::PossibleMove, var("d")),
            vec![
                Atom::unary(Pred::Location, var("x")),
                Atom::unary(Pred::Direction, var("d")),
                Atom::unary(Pred::MovementOption, var("d")),
            ],
        ),
        Rule::new(
            Atom::unary(Pred::BlockedDirection, var("d")),
            vec![
                Atom::unary(Pred::Location, var("x")),
                Atom::unary(Pred::Direction, var("d")),
                Atom::unary(Pred::WallFound, var("d")),
            ],
        ),
        Rule::new(
            Atom::unary(Pred::TryAlternative, var("alt")),
            vec![
                Atom::unary(Pred::Location, var("x")),
                Atom::unary(Pred::Direction, var("d")),
                Atom::unary(Pred::BlockedDirection, var("d")),
                Atom::unary(Pred::Direction, var("alt")),
                Atom::binary(Pred::NotOpposite, var("d"), var("alt")),
            ],
        ),
        // Alternatives
        Rule::new(
            Atom::binary(Pred::AlternativeDirection, var("d1"), var("d2")),
            vec![
                Atom::unary(Pred::Direction, var("d1")),
                Atom::unary(Pred::Direction, var("d2")),
                Atom::binary(Pred::NotOpposite, var("d1"), var("d2")),
            ],
        ),
        // Safety grading
        Rule::new(
            Atom::unary(Pred::SafeButDangerous, var("x")),
            vec![
                Atom::unary(Pred::Location, var("x")),
                Atom::unary(Pred::SafeSquare, var("x")),
                Atom::unary(Pred::BreezePresent, var("x")),
            ],
        ),
        Rule::new(
            Atom::unary(Pred::FullySafe, var("x")),
            vec![
                Atom::unary(Pred::Location, var("x")),
                Atom::unary(Pred::SafeSquare, var("x")),
                Atom::unary(Pred::NoBreeze, var("x")),
            ],
        ),
        Rule::new(
            Atom::unary(Pred::PreferredSquare, var("x")),
            vec![
                Atom::unary(Pred::Location, var("x")),
                Atom::unary(Pred::FullySafe, var("x")),
            ],
        ),
        // Backtracking
        Rule::new(
            Atom::unary(Pred::BacktrackOption, var("back")),
            vec![
                Atom::unary(Pred::Location, var("x")),
                Atom::unary(Pred::Direction, var("back")),
                Atom::binary(Pred::OppositeDirection, var("last"), var("back")),
                Atom::unary(Pred::WallFound, var("last")),
            ],
        ),
        Rule::new(
            Atom::unary(Pred::ReturnMove, var("d")),
            vec![
                Atom::unary(Pred::Location, var("x")),
                Atom::unary(Pred::Direction, var("d")),
                Atom::unary(Pred::SafeSquare, var("x")),
                Atom::unary(Pred::LastVisited, var("x")),
            ],
        ),
    ];

    // Opposite-direction facts are symmetric and fixed.
    for dir in Direction::ALL {
        rules.push(Rule::new(
            Atom::binary(Pred::OppositeDirection, dir, dir.opposite()),
            vec![
                Atom::unary(Pred::Direction, dir),
                Atom::unary(Pred::Direction, dir.opposite()),
            ],
        ));
    }

    rules
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_set_is_range_restricted() {
        for rule in rule_set() {
            let body_vars: Vec<&str> = rule.body.iter().flat_map(Atom::variables).collect();
            for head_var in rule.head.variables() {
                assert!(
                    body_vars.contains(&head_var),
                    "head variable {head_var} unbound in rule for {:?}",
                    rule.head.pred
                );
            }
        }
    }

    #[test]
    fn test_base_facts_are_ground() {
        assert!(base_facts().iter().all(Atom::is_ground));
    }
}

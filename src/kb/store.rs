//! Fact store and the inference oracle behind it
//!
//! `FactStore` owns the agent's append-only knowledge: ground facts asserted
//! as percepts arrive, resolved against the fixed rule set through an
//! `InferenceOracle`. The default oracle is a naive bottom-up forward
//! chainer, which is sufficient here because the domain is five symbols and
//! a closed predicate alphabet; any oracle that reproduces the same
//! entailments can be swapped in at the trait seam.

use crate::core::error::{Result, ScoutError};
use crate::kb::fact::{Atom, Symbol, Term};
use crate::kb::rules::{self, Rule};
use ahash::AHashSet;

/// External inference boundary: assertion plus existential entailment
pub trait InferenceOracle {
    /// Assert a ground fact. Idempotent: re-asserting is a no-op.
    fn assert_fact(&mut self, fact: Atom) -> Result<()>;

    /// True iff some substitution of the goal's variables is entailed by the
    /// current facts and rules. Ground goals are plain membership checks.
    fn entails(&self, goal: &Atom) -> Result<bool>;
}

/// Variable bindings accumulated while matching a rule body
type Subst = Vec<(&'static str, Symbol)>;

fn bound(subst: &Subst, name: &str) -> Option<Symbol> {
    subst
        .iter()
        .find(|(var, _)| *var == name)
        .map(|(_, sym)| *sym)
}

/// Extend `subst` so that `pattern` matches the ground `fact`, or fail
fn match_atom(pattern: &Atom, fact: &Atom, subst: &Subst) -> Option<Subst> {
    if pattern.pred != fact.pred || pattern.args.len() != fact.args.len() {
        return None;
    }
    let mut extended = subst.clone();
    for (pat, ground) in pattern.args.iter().zip(&fact.args) {
        let Term::Sym(sym) = ground else {
            return None;
        };
        match pat {
            Term::Sym(expected) if expected == sym => {}
            Term::Sym(_) => return None,
            Term::Var(name) => match bound(&extended, name) {
                Some(existing) if existing == *sym => {}
                Some(_) => return None,
                None => extended.push((name, *sym)),
            },
        }
    }
    Some(extended)
}

/// Instantiate an atom under a substitution; all variables must be bound
fn instantiate(atom: &Atom, subst: &Subst) -> Atom {
    let args = atom
        .args
        .iter()
        .map(|term| match term {
            Term::Sym(sym) => Term::Sym(*sym),
            Term::Var(name) => {
                // Range restriction guarantees the binding exists.
                Term::Sym(bound(subst, name).unwrap_or(Symbol::Here))
            }
        })
        .collect();
    Atom {
        pred: atom.pred,
        args,
    }
}

/// Naive bottom-up forward chainer over definite clauses
///
/// Maintains the deductive closure incrementally: each assertion re-saturates
/// from the current closure, which is cheap because facts are monotonic and
/// the domain is finite.
#[derive(Debug)]
pub struct ForwardChainer {
    rules: Vec<Rule>,
    closure: AHashSet<Atom>,
    max_iterations: usize,
}

impl ForwardChainer {
    pub fn new(rules: Vec<Rule>, max_iterations: usize) -> Result<Self> {
        for rule in &rules {
            let body_vars: Vec<&str> = rule.body.iter().flat_map(Atom::variables).collect();
            for head_var in rule.head.variables() {
                if !body_vars.contains(&head_var) {
                    return Err(ScoutError::Configuration(format!(
                        "head variable {head_var} of rule for {:?} is unbound in the body",
                        rule.head.pred
                    )));
                }
            }
        }
        Ok(Self {
            rules,
            closure: AHashSet::new(),
            max_iterations,
        })
    }

    /// Derive consequences until no rule produces a new fact
    fn saturate(&mut self) -> Result<()> {
        for _ in 0..self.max_iterations {
            let mut fresh: Vec<Atom> = Vec::new();
            for rule in &self.rules {
                let mut substs: Vec<Subst> = vec![Vec::new()];
                for body_atom in &rule.body {
                    let mut next = Vec::new();
                    for subst in &substs {
                        for fact in &self.closure {
                            if let Some(extended) = match_atom(body_atom, fact, subst) {
                                next.push(extended);
                            }
                        }
                    }
                    substs = next;
                    if substs.is_empty() {
                        break;
                    }
                }
                for subst in &substs {
                    let head = instantiate(&rule.head, subst);
                    if !self.closure.contains(&head) && !fresh.contains(&head) {
                        fresh.push(head);
                    }
                }
            }
            if fresh.is_empty() {
                return Ok(());
            }
            self.closure.extend(fresh);
        }
        Err(ScoutError::Query(format!(
            "saturation did not converge within {} iterations",
            self.max_iterations
        )))
    }
}

impl InferenceOracle for ForwardChainer {
    fn assert_fact(&mut self, fact: Atom) -> Result<()> {
        if !fact.is_ground() {
            return Err(ScoutError::Configuration(format!(
                "cannot assert non-ground fact {fact}"
            )));
        }
        if self.closure.insert(fact) {
            self.saturate()?;
        }
        Ok(())
    }

    fn entails(&self, goal: &Atom) -> Result<bool> {
        if goal.is_ground() {
            return Ok(self.closure.contains(goal));
        }
        let empty: Subst = Vec::new();
        Ok(self
            .closure
            .iter()
            .any(|fact| match_atom(goal, fact, &empty).is_some()))
    }
}

/// The agent's knowledge base: seed facts plus whatever percept processing
/// asserts over the session lifetime
pub struct FactStore {
    oracle: Box<dyn InferenceOracle>,
}

impl FactStore {
    /// Build a store with the default forward chainer and the fixed rule set
    pub fn new(max_chain_iterations: usize) -> Result<Self> {
        let chainer = ForwardChainer::new(rules::rule_set(), max_chain_iterations)?;
        Self::with_oracle(Box::new(chainer))
    }

    /// Build a store around a caller-supplied oracle, seeding the base facts
    pub fn with_oracle(oracle: Box<dyn InferenceOracle>) -> Result<Self> {
        let mut store = Self { oracle };
        for fact in rules::base_facts() {
            store.assert_fact(fact)?;
        }
        Ok(store)
    }

    pub fn assert_fact(&mut self, fact: Atom) -> Result<()> {
        self.oracle.assert_fact(fact)
    }

    pub fn query(&self, goal: &Atom) -> Result<bool> {
        self.oracle.entails(goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Direction;
    use crate::kb::fact::Pred;

    fn store() -> FactStore {
        FactStore::new(64).expect("fixed rule set must validate")
    }

    #[test]
    fn test_base_facts_entail_possible_moves() {
        let kb = store();
        for dir in Direction::ALL {
            assert!(kb.query(&Atom::unary(Pred::PossibleMove, dir)).unwrap());
        }
    }

    #[test]
    fn test_assertion_is_idempotent() {
        let mut kb = store();
        let fact = Atom::unary(Pred::WallFound, Direction::North);
        kb.assert_fact(fact.clone()).unwrap();
        let blocked = Atom::unary(Pred::BlockedDirection, Direction::North);
        assert!(kb.query(&blocked).unwrap());

        // Re-asserting must not change any entailment.
        kb.assert_fact(fact).unwrap();
        assert!(kb.query(&blocked).unwrap());
        assert!(!kb
            .query(&Atom::unary(Pred::BlockedDirection, Direction::South))
            .unwrap());
    }

    #[test]
    fn test_wall_found_derives_alternatives() {
        let mut kb = store();
        kb.assert_fact(Atom::unary(Pred::WallFound, Direction::East))
            .unwrap();
        kb.assert_fact(Atom::binary(
            Pred::NotOpposite,
            Direction::East,
            Direction::North,
        ))
        .unwrap();

        assert!(kb
            .query(&Atom::unary(Pred::TryAlternative, Direction::North))
            .unwrap());
        assert!(kb
            .query(&Atom::binary(
                Pred::AlternativeDirection,
                Direction::East,
                Direction::North
            ))
            .unwrap());
        // The backtrack rule fires off the symmetric opposite facts.
        assert!(kb
            .query(&Atom::unary(Pred::BacktrackOption, Direction::West))
            .unwrap());
    }

    #[test]
    fn test_existential_query_with_variable() {
        let mut kb = store();
        assert!(!kb
            .query(&Atom::unary(Pred::WallFound, Term::Var("d")))
            .unwrap());
        kb.assert_fact(Atom::unary(Pred::WallFound, Direction::West))
            .unwrap();
        assert!(kb
            .query(&Atom::unary(Pred::WallFound, Term::Var("d")))
            .unwrap());
    }

    #[test]
    fn test_safety_grading_rules() {
        let mut kb = store();
        kb.assert_fact(Atom::unary(Pred::NoBreeze, Symbol::Here))
            .unwrap();
        assert!(kb.query(&Atom::unary(Pred::FullySafe, Symbol::Here)).unwrap());
        assert!(kb
            .query(&Atom::unary(Pred::PreferredSquare, Symbol::Here))
            .unwrap());

        kb.assert_fact(Atom::unary(Pred::SafeSquare, Symbol::North))
            .unwrap();
        kb.assert_fact(Atom::unary(Pred::BreezePresent, Symbol::North))
            .unwrap();
        assert!(kb
            .query(&Atom::unary(Pred::SafeButDangerous, Symbol::North))
            .unwrap());
    }

    #[test]
    fn test_non_ground_assert_is_rejected() {
        let mut kb = store();
        let err = kb
            .assert_fact(Atom::unary(Pred::WallFound, Term::Var("d")))
            .unwrap_err();
        assert!(matches!(err, ScoutError::Configuration(_)));
    }

    #[test]
    fn test_unbound_head_variable_is_rejected() {
        let bad = Rule::new(
            Atom::unary(Pred::PossibleMove, Term::Var("ghost")),
            vec![Atom::unary(Pred::Direction, Term::Var("d"))],
        );
        let err = ForwardChainer::new(vec![bad], 64).unwrap_err();
        assert!(matches!(err, ScoutError::Configuration(_)));
    }
}

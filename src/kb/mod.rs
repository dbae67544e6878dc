//! Declarative knowledge base: facts, rules, and the inference oracle

pub mod fact;
pub mod rules;
pub mod store;

pub use fact::{Atom, Pred, Symbol, Term};
pub use rules::{base_facts, rule_set, Rule};
pub use store::{FactStore, ForwardChainer, InferenceOracle};

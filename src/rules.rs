//! Forward-chaining rule engine

pub mod fact;
pub mod goals;
pub mod inference;
pub mod knowledge_base;
pub mod loader;
pub mod lookup;
pub mod rule;

pub use fact::{Fact, FactSet, fact_set, parse_facts};
pub use goals::{Goals, extract_goals};
pub use inference::{Diagnosis, Firing, Inference, diagnose, infer};
pub use loader::{load_rules, load_rules_from_path};
pub use lookup::direct_lookup;
pub use rule::{Category, Rule, RuleBase};

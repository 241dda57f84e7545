//! Single-pass rule lookup without chaining.

use super::{
    fact::FactSet,
    rule::{Rule, RuleBase},
};

/// Return the first rule whose conditions are all present in `facts`.
///
/// Unlike [`infer`](super::infer) this never derives anything: conclusions
/// of earlier rules are not fed back in, and rule order decides which match
/// wins.
pub fn direct_lookup<'a>(rules: &'a RuleBase, facts: &FactSet) -> Option<&'a Rule> {
    rules.rules().iter().find(|rule| rule.is_satisfied_by(facts))
}

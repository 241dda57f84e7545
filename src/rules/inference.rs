//! Forward-chaining inference to a fixed point.

use serde::Serialize;

use super::{
    fact::{Fact, FactSet},
    goals::{Goals, extract_goals},
    rule::RuleBase,
};

/// One rule application recorded during inference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Firing {
    /// 1-based pass in which the rule fired
    pub pass: usize,
    /// Index of the rule in the rule base
    pub rule_index: usize,
    /// Fact the rule added
    pub conclusion: Fact,
}

/// Result of a single inference run.
///
/// [`Inference::facts`] is the full fixed-point set including the initial
/// facts; [`Inference::new_facts`] is the derived part only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inference {
    initial: FactSet,
    facts: FactSet,
    passes: usize,
    firings: Vec<Firing>,
}

impl Inference {
    /// Every fact known at the fixed point.
    pub fn facts(&self) -> &FactSet {
        &self.facts
    }

    /// Facts derived by rules, excluding the initial facts.
    pub fn new_facts(&self) -> FactSet {
        self.facts.difference(&self.initial).cloned().collect()
    }

    pub fn initial_facts(&self) -> &FactSet {
        &self.initial
    }

    /// Number of full passes over the rule base, including the final pass
    /// that added nothing.
    pub fn passes(&self) -> usize {
        self.passes
    }

    /// Rule applications in the order they happened.
    pub fn firings(&self) -> &[Firing] {
        &self.firings
    }

    pub fn into_facts(self) -> FactSet {
        self.facts
    }
}

/// Derive every fact reachable from `initial_facts` under `rules`.
///
/// Passes over the rule base repeat until one adds nothing. Facts are only
/// ever added, so the loop terminates even for cyclic rules, after at most
/// one pass per distinct conclusion plus the final quiet pass. The resulting
/// fact set does not depend on rule order.
///
/// # Examples
///
/// ```
/// use tutor::rules::{Category, Rule, RuleBase, fact_set, infer};
///
/// let rules = RuleBase::new(vec![
///     Rule::new(["fever", "cough"], "suspect_flu", Category::Intermediate)?,
/// ]);
/// let inference = infer(&rules, &fact_set(["fever", "cough"]));
/// assert!(inference.facts().contains("suspect_flu"));
/// assert_eq!(inference.new_facts().len(), 1);
/// # Ok::<(), tutor::Error>(())
/// ```
pub fn infer(rules: &RuleBase, initial_facts: &FactSet) -> Inference {
    let mut facts = initial_facts.clone();
    let mut firings = Vec::new();
    let mut passes = 0;

    loop {
        passes += 1;
        let mut added = false;

        for (rule_index, rule) in rules.rules().iter().enumerate() {
            if !rule.is_satisfied_by(&facts) || facts.contains(rule.conclusion()) {
                continue;
            }

            tracing::debug!(pass = passes, rule = %rule, "rule fired");
            facts.insert(rule.conclusion().clone());
            firings.push(Firing {
                pass: passes,
                rule_index,
                conclusion: rule.conclusion().clone(),
            });
            added = true;
        }

        tracing::trace!(pass = passes, facts = facts.len(), "pass complete");
        if !added {
            break;
        }
    }

    Inference {
        initial: initial_facts.clone(),
        facts,
        passes,
        firings,
    }
}

/// Inference plus the goals it reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnosis {
    pub inference: Inference,
    pub goals: Goals,
}

/// Run inference and report the reportable conclusions it reached.
pub fn diagnose(rules: &RuleBase, initial_facts: &FactSet) -> Diagnosis {
    let inference = infer(rules, initial_facts);
    let goals = extract_goals(rules, inference.facts());
    Diagnosis { inference, goals }
}

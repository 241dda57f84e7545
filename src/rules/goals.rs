//! Goal extraction by category.

use std::collections::BTreeMap;

use serde::Serialize;

use super::{
    fact::{Fact, FactSet},
    rule::{Category, RuleBase},
};

/// Reportable conclusions grouped by category.
///
/// Within a category, facts appear in rule-base order with duplicates
/// removed (first occurrence wins).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Goals {
    by_category: BTreeMap<Category, Vec<Fact>>,
}

impl Goals {
    /// Facts reported under `category`. Empty for `Intermediate`.
    pub fn get(&self, category: Category) -> &[Fact] {
        self.by_category
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn diagnoses(&self) -> &[Fact] {
        self.get(Category::Diagnosis)
    }

    pub fn recommendations(&self) -> &[Fact] {
        self.get(Category::Recommendation)
    }

    pub fn goals(&self) -> &[Fact] {
        self.get(Category::Goal)
    }

    pub fn is_empty(&self) -> bool {
        self.by_category.values().all(Vec::is_empty)
    }

    /// Non-empty categories in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[Fact])> {
        self.by_category
            .iter()
            .map(|(category, facts)| (*category, facts.as_slice()))
    }

    fn push(&mut self, category: Category, fact: &Fact) {
        let entry = self.by_category.entry(category).or_default();
        if !entry.contains(fact) {
            entry.push(fact.clone());
        }
    }
}

/// Collect the reportable conclusions present in `facts`.
///
/// Walks the rules in order; every rule whose conclusion is known and whose
/// category is reportable contributes that conclusion to its category.
pub fn extract_goals(rules: &RuleBase, facts: &FactSet) -> Goals {
    let mut goals = Goals::default();
    for rule in rules {
        if rule.category().is_reportable() && facts.contains(rule.conclusion()) {
            goals.push(rule.category(), rule.conclusion());
        }
    }
    goals
}

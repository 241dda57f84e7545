//! Rule and rule base representation.

use std::{collections::BTreeSet, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::fact::{Fact, FactSet};
use crate::{Error, Result};

/// Kind of fact a rule concludes.
///
/// Only `Intermediate` conclusions are hidden from goal reports; the other
/// kinds are reportable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Intermediate,
    Diagnosis,
    Recommendation,
    Goal,
}

impl Category {
    /// All categories in report order.
    pub const ALL: [Category; 4] = [
        Category::Intermediate,
        Category::Diagnosis,
        Category::Recommendation,
        Category::Goal,
    ];

    /// Whether conclusions of this category show up in goal reports.
    pub fn is_reportable(self) -> bool {
        self != Category::Intermediate
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Intermediate => "intermediate",
            Category::Diagnosis => "diagnosis",
            Category::Recommendation => "recommendation",
            Category::Goal => "goal",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "intermediate" => Ok(Category::Intermediate),
            "diagnosis" => Ok(Category::Diagnosis),
            // the demo knowledge bases spell it both ways
            "recommendation" | "reccomendation" => Ok(Category::Recommendation),
            "goal" => Ok(Category::Goal),
            _ => Err(Error::ParseCategory {
                input: s.to_string(),
                expected: "intermediate, diagnosis, recommendation, goal".to_string(),
            }),
        }
    }
}

/// A single inference rule: when every condition holds, the conclusion holds.
///
/// Rules can only be built through [`Rule::new`], so every rule in a
/// [`RuleBase`] has at least one condition and a non-blank conclusion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rule {
    conditions: FactSet,
    conclusion: Fact,
    category: Category,
}

impl Rule {
    /// Create a validated rule.
    ///
    /// Blank condition strings are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingConclusion`] if the conclusion is blank and
    /// [`Error::EmptyConditions`] if no non-blank condition remains.
    ///
    /// # Examples
    ///
    /// ```
    /// use tutor::rules::{Category, Rule};
    ///
    /// let rule = Rule::new(["fever", "cough"], "suspect_flu", Category::Intermediate)?;
    /// assert_eq!(rule.conditions().len(), 2);
    ///
    /// assert!(Rule::new(Vec::<&str>::new(), "x", Category::Goal).is_err());
    /// # Ok::<(), tutor::Error>(())
    /// ```
    pub fn new<I, S>(conditions: I, conclusion: impl Into<Fact>, category: Category) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<Fact>,
    {
        let conclusion = conclusion.into();
        if conclusion.as_str().trim().is_empty() {
            return Err(Error::MissingConclusion {
                context: String::new(),
            });
        }

        let conditions: FactSet = conditions
            .into_iter()
            .map(Into::into)
            .filter(|fact: &Fact| !fact.as_str().trim().is_empty())
            .collect();
        if conditions.is_empty() {
            return Err(Error::EmptyConditions {
                conclusion: conclusion.into_inner(),
            });
        }

        Ok(Rule {
            conditions,
            conclusion,
            category,
        })
    }

    pub fn conditions(&self) -> &FactSet {
        &self.conditions
    }

    pub fn conclusion(&self) -> &Fact {
        &self.conclusion
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Check whether every condition is present in `facts`.
    pub fn is_satisfied_by(&self, facts: &FactSet) -> bool {
        self.conditions.is_subset(facts)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let conditions: Vec<&str> = self.conditions.iter().map(Fact::as_str).collect();
        write!(
            f,
            "IF {} THEN {} ({})",
            conditions.join(" AND "),
            self.conclusion,
            self.category
        )
    }
}

/// An ordered, immutable collection of rules.
///
/// Order only affects traces and the order of reported goals, never the set
/// of facts inference arrives at.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RuleBase {
    rules: Vec<Rule>,
}

impl RuleBase {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Distinct conclusions across all rules.
    pub fn conclusions(&self) -> BTreeSet<&Fact> {
        self.rules.iter().map(Rule::conclusion).collect()
    }

    /// Condition facts that no rule concludes, i.e. what has to be asked of
    /// the user rather than derived.
    pub fn premises(&self) -> BTreeSet<&Fact> {
        let conclusions = self.conclusions();
        self.rules
            .iter()
            .flat_map(|rule| rule.conditions().iter())
            .filter(|fact| !conclusions.contains(fact))
            .collect()
    }
}

impl FromIterator<Rule> for RuleBase {
    fn from_iter<T: IntoIterator<Item = Rule>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a RuleBase {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_requires_conditions() {
        let err = Rule::new(Vec::<&str>::new(), "suspect_flu", Category::Intermediate).unwrap_err();
        assert!(matches!(err, Error::EmptyConditions { .. }));

        let err = Rule::new(["  "], "suspect_flu", Category::Intermediate).unwrap_err();
        assert!(err.to_string().contains("suspect_flu"));
    }

    #[test]
    fn rule_requires_conclusion() {
        let err = Rule::new(["fever"], " ", Category::Diagnosis).unwrap_err();
        assert!(matches!(err, Error::MissingConclusion { .. }));
    }

    #[test]
    fn category_parses_case_insensitively() {
        assert_eq!("Diagnosis".parse::<Category>().unwrap(), Category::Diagnosis);
        assert_eq!(
            "RECCOMENDATION".parse::<Category>().unwrap(),
            Category::Recommendation
        );
        assert!("prognosis".parse::<Category>().is_err());
    }

    #[test]
    fn only_intermediate_is_hidden() {
        let reportable: Vec<Category> = Category::ALL
            .into_iter()
            .filter(|c| c.is_reportable())
            .collect();
        assert_eq!(
            reportable,
            vec![Category::Diagnosis, Category::Recommendation, Category::Goal]
        );
    }

    #[test]
    fn premises_exclude_derived_facts() {
        let base = RuleBase::new(vec![
            Rule::new(["fever", "cough"], "suspect_flu", Category::Intermediate).unwrap(),
            Rule::new(
                ["suspect_flu", "body_aches"],
                "diagnosis_influenza",
                Category::Diagnosis,
            )
            .unwrap(),
        ]);

        let premises: Vec<&str> = base.premises().into_iter().map(Fact::as_str).collect();
        assert_eq!(premises, vec!["body_aches", "cough", "fever"]);
        assert_eq!(base.conclusions().len(), 2);
    }

    #[test]
    fn display_lists_conditions() {
        let rule = Rule::new(["b", "a"], "c", Category::Goal).unwrap();
        assert_eq!(rule.to_string(), "IF a AND b THEN c (goal)");
    }
}

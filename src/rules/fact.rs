//! Symbolic facts and fact sets.

use std::{borrow::Borrow, collections::BTreeSet, fmt};

use serde::{Deserialize, Serialize};

/// An atomic symbolic proposition such as `fever` or `diagnosis_influenza`.
///
/// Facts compare by their text only. The `Ord` impl exists so that fact sets
/// iterate in a stable order; it carries no meaning for inference.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Fact(String);

impl Fact {
    /// Create a new fact.
    ///
    /// # Examples
    ///
    /// ```
    /// use tutor::rules::Fact;
    ///
    /// let fact = Fact::new("fever");
    /// assert_eq!(fact.as_str(), "fever");
    /// ```
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the fact as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert the fact into its inner String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<&str> for Fact {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl Borrow<str> for Fact {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl From<String> for Fact {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for Fact {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for Fact {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// A set of facts with deterministic iteration order.
pub type FactSet = BTreeSet<Fact>;

/// Build a fact set from anything string-like.
pub fn fact_set<I, S>(facts: I) -> FactSet
where
    I: IntoIterator<Item = S>,
    S: Into<Fact>,
{
    facts.into_iter().map(Into::into).collect()
}

/// Parse free-text user input into facts.
///
/// The input is split on commas; each piece is trimmed and lowercased, and
/// empty pieces are dropped.
///
/// ```
/// use tutor::rules::parse_facts;
///
/// let facts = parse_facts(" Fever, Cough ,,Body_Aches");
/// assert_eq!(facts.len(), 3);
/// assert!(facts.contains("body_aches"));
/// ```
pub fn parse_facts(input: &str) -> FactSet {
    input
        .split(',')
        .map(|piece| piece.trim().to_lowercase())
        .filter(|piece| !piece.is_empty())
        .map(Fact::new)
        .collect()
}

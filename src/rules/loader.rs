//! CSV rule-file loading
//!
//! Rule files have no header row. Each row holds up to four positional
//! columns, `if`, `and`, `then` and `category`:
//!
//! ```text
//! fever, cough, suspect_flu,
//! suspect_flu, body_aches, diagnosis_influenza, diagnosis
//! diagnosis_influenza, , recommend_rest, recommendation
//! ```
//!
//! - Rows whose cells are all blank are skipped, as are rows with a blank
//!   `if` column.
//! - `and` may be blank for single-condition rules.
//! - A blank `category` means the rule is intermediate. A category name
//!   selects that category; any other non-blank marker makes the rule a goal.

use std::{fs::File, io::Read, path::Path};

use super::rule::{Category, Rule, RuleBase};
use crate::{Error, Result};

const IF_COLUMN: usize = 0;
const AND_COLUMN: usize = 1;
const THEN_COLUMN: usize = 2;
const CATEGORY_COLUMN: usize = 3;

/// Parse a rule base from CSV data.
///
/// # Errors
///
/// Returns [`Error::Csv`] for malformed CSV and
/// [`Error::MissingConclusion`] for a row with conditions but no `then`
/// column. Nothing is returned for a partially valid file.
///
/// # Examples
///
/// ```
/// use tutor::rules::load_rules;
///
/// let data = "fever,cough,suspect_flu,\nsuspect_flu,body_aches,diagnosis_influenza,diagnosis\n";
/// let rules = load_rules(data.as_bytes())?;
/// assert_eq!(rules.len(), 2);
/// # Ok::<(), tutor::Error>(())
/// ```
pub fn load_rules<R: Read>(reader: R) -> Result<RuleBase> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rules = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let cell = |idx: usize| record.get(idx).unwrap_or("");

        if record.iter().all(str::is_empty) || cell(IF_COLUMN).is_empty() {
            tracing::trace!(line, "skipping row without conditions");
            continue;
        }

        if cell(THEN_COLUMN).is_empty() {
            return Err(Error::MissingConclusion {
                context: format!(" on line {line}"),
            });
        }

        let category = parse_category_marker(cell(CATEGORY_COLUMN));
        let conditions = [cell(IF_COLUMN), cell(AND_COLUMN)];
        rules.push(Rule::new(conditions, cell(THEN_COLUMN), category)?);
    }

    tracing::debug!(rules = rules.len(), "loaded rule base");
    Ok(RuleBase::new(rules))
}

/// Read and parse a CSV rule file.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened, otherwise the same
/// errors as [`load_rules`].
pub fn load_rules_from_path(path: &Path) -> Result<RuleBase> {
    let file = File::open(path).map_err(|source| Error::Io {
        operation: format!("open rule file {}", path.display()),
        source,
    })?;
    load_rules(file)
}

fn parse_category_marker(marker: &str) -> Category {
    if marker.is_empty() {
        return Category::Intermediate;
    }
    marker.parse().unwrap_or(Category::Goal)
}

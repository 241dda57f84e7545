//! Symptoms command - List the facts a rule base can start from

use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::Result;
use clap::Parser;

use super::diagnose::load_rule_base;
use crate::{cli::config::AppConfig, rules::RuleBase};

#[derive(Parser, Debug, Default)]
#[command(about = "List recognized symptoms")]
pub struct SymptomsArgs {
    /// CSV rule file (defaults to the built-in medical rules)
    #[arg(long)]
    pub rules: Option<PathBuf>,

    /// Print every rule as well
    #[arg(long)]
    pub verbose_rules: bool,
}

pub fn execute(args: SymptomsArgs, config: &AppConfig) -> Result<()> {
    let rules = load_rule_base(args.rules.as_deref(), config)?;
    run(&args, &rules, &mut io::stdout().lock())
}

/// Symptoms are the rule base premises; derived facts such as `suspect_flu`
/// are never listed.
pub fn run<W: Write>(args: &SymptomsArgs, rules: &RuleBase, out: &mut W) -> Result<()> {
    writeln!(out, "Recognized symptoms:")?;
    for fact in rules.premises() {
        writeln!(out, "  - {fact}")?;
    }

    if args.verbose_rules {
        writeln!(out, "\nRules:")?;
        for (i, rule) in rules.rules().iter().enumerate() {
            writeln!(out, "  {:>2}. {rule}", i + 1)?;
        }
    }
    Ok(())
}

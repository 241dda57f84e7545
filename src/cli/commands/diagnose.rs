//! Diagnose command - Run the rule engine over reported symptoms

use std::{
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    cli::{
        config::AppConfig,
        output::{format_facts, print_kv, print_section},
        prompt::Prompt,
    },
    rules::{FactSet, RuleBase, diagnose, direct_lookup, knowledge_base, load_rules_from_path, parse_facts},
};

#[derive(Parser, Debug, Default)]
#[command(about = "Diagnose symptoms with the forward-chaining rule engine")]
pub struct DiagnoseArgs {
    /// CSV rule file (defaults to the built-in medical rules)
    #[arg(long)]
    pub rules: Option<PathBuf>,

    /// Comma-separated symptoms; prompts interactively when omitted
    #[arg(long, short = 's')]
    pub symptoms: Option<String>,

    /// Also print the derived facts and pass count
    #[arg(long)]
    pub show_facts: bool,

    /// Report the first directly matching rule instead of chaining
    #[arg(long)]
    pub direct: bool,
}

/// Load the rule base named on the command line, in the config, or the
/// built-in one, in that order of preference.
pub fn load_rule_base(cli_path: Option<&Path>, config: &AppConfig) -> Result<RuleBase> {
    match cli_path.or(config.rules_path.as_deref()) {
        Some(path) => load_rules_from_path(path)
            .with_context(|| format!("loading rules from {}", path.display())),
        None => Ok(knowledge_base::medical()),
    }
}

pub fn execute(args: DiagnoseArgs, config: &AppConfig) -> Result<()> {
    let rules = load_rule_base(args.rules.as_deref(), config)?;
    tracing::info!(rules = rules.len(), "rule base ready");

    let stdin = io::stdin();
    let mut prompt = Prompt::new(stdin.lock(), io::stdout().lock());
    run(&args, &rules, &mut prompt)
}

/// Answer the symptoms given on the command line, or loop over prompted
/// input until the user quits.
pub fn run<R: BufRead, W: Write>(
    args: &DiagnoseArgs,
    rules: &RuleBase,
    prompt: &mut Prompt<R, W>,
) -> Result<()> {
    if let Some(symptoms) = &args.symptoms {
        return report(args, rules, &parse_facts(symptoms), prompt.output());
    }

    let out = prompt.output();
    writeln!(out, "Welcome to the Medical Diagnosis Expert System!")?;
    writeln!(out, "Possible symptoms:")?;
    writeln!(out, "{}", format_facts(rules.premises()))?;
    writeln!(out, "Enter symptoms separated by commas (case-insensitive), or 'quit' to exit.")?;

    while let Some(line) = prompt.ask("Symptoms: ")? {
        let facts = parse_facts(&line);
        if facts.is_empty() {
            writeln!(prompt.output(), "No symptoms entered.")?;
            continue;
        }
        report(args, rules, &facts, prompt.output())?;
    }

    writeln!(prompt.output(), "Goodbye.")?;
    Ok(())
}

fn report<W: Write>(args: &DiagnoseArgs, rules: &RuleBase, facts: &FactSet, out: &mut W) -> Result<()> {
    print_section(out, "Results")?;

    if args.direct {
        let verdict = match direct_lookup(rules, facts) {
            Some(rule) => rule.conclusion().to_string(),
            None => "Undetermined. No rule matched all symptoms.".to_string(),
        };
        print_kv(out, "Match", &verdict)?;
        return Ok(());
    }

    let diagnosis = diagnose(rules, facts);
    print_kv(out, "Diagnoses", &format_facts(diagnosis.goals.diagnoses()))?;
    print_kv(
        out,
        "Recommendations",
        &format_facts(diagnosis.goals.recommendations()),
    )?;
    if !diagnosis.goals.goals().is_empty() {
        print_kv(out, "Goals", &format_facts(diagnosis.goals.goals()))?;
    }

    if args.show_facts {
        print_kv(
            out,
            "Derived facts",
            &format_facts(&diagnosis.inference.new_facts()),
        )?;
        print_kv(out, "Passes", &diagnosis.inference.passes().to_string())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn session(args: &DiagnoseArgs, input: &str) -> String {
        let mut out = Vec::new();
        let mut prompt = Prompt::new(Cursor::new(input.to_string()), &mut out);
        run(args, &knowledge_base::medical(), &mut prompt).unwrap();
        drop(prompt);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn symptoms_flag_reports_once() {
        let args = DiagnoseArgs {
            symptoms: Some("Fever, Cough, Body_Aches".to_string()),
            show_facts: true,
            ..Default::default()
        };
        let output = session(&args, "");

        assert!(output.contains("diagnosis_influenza"));
        assert!(output.contains("recommend_rest"));
        assert!(output.contains("suspect_flu"));
        assert!(!output.contains("Welcome"));
    }

    #[test]
    fn interactive_loop_ends_on_quit() {
        let output = session(&DiagnoseArgs::default(), "no_appetite,stomach_pain\n\nquit\nfever\n");

        assert!(output.contains("Possible symptoms:"));
        assert!(output.contains("diagnosis_food_poisoning"));
        assert!(output.contains("No symptoms entered."));
        assert_eq!(output.matches("Results").count(), 1);
        assert!(output.ends_with("Goodbye.\n"));
    }

    #[test]
    fn unmatched_symptoms_report_none() {
        let args = DiagnoseArgs {
            symptoms: Some("sneezing".to_string()),
            ..Default::default()
        };
        let output = session(&args, "");
        assert!(output.contains("None"));
    }

    #[test]
    fn direct_mode_does_not_chain() {
        let args = DiagnoseArgs {
            symptoms: Some("fever,cough,body_aches".to_string()),
            direct: true,
            ..Default::default()
        };
        let output = session(&args, "");
        assert!(output.contains("suspect_flu"));
        assert!(!output.contains("diagnosis_influenza"));
    }

    #[test]
    fn rules_path_from_config_is_used() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "sneezing,,diagnosis_hay_fever,diagnosis").unwrap();
        let config = AppConfig {
            rules_path: Some(file.path().to_path_buf()),
            ..Default::default()
        };

        let rules = load_rule_base(None, &config).unwrap();
        assert_eq!(rules.len(), 1);
        assert!(load_rule_base(Some(Path::new("missing.csv")), &config).is_err());
    }
}

//! Tutor CLI - Rule-based diagnosis and minimax Tic-Tac-Toe
//!
//! Subcommands:
//! - `diagnose`: forward-chain from symptoms to diagnoses and recommendations
//! - `symptoms`: list the symptoms a rule base recognizes
//! - `play`: interactive game against a friend or the search
//! - `best-move`: ask the search about one position

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tutor::cli::{
    commands::{best_move, diagnose, play, symptoms},
    config::AppConfig,
};

#[derive(Parser)]
#[command(name = "tutor")]
#[command(version, about = "Forward-chaining diagnosis and minimax Tic-Tac-Toe", long_about = None)]
struct Cli {
    /// Log inference and search steps (overridden by RUST_LOG)
    #[arg(long, short, global = true)]
    verbose: bool,

    /// JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Diagnose symptoms with the rule engine
    Diagnose(diagnose::DiagnoseArgs),

    /// List recognized symptoms
    Symptoms(symptoms::SymptomsArgs),

    /// Play an interactive game
    Play(play::PlayArgs),

    /// Print the minimax move for a position
    BestMove(best_move::BestMoveArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Commands::Diagnose(args) => diagnose::execute(args, &config),
        Commands::Symptoms(args) => symptoms::execute(args, &config),
        Commands::Play(args) => play::execute(args, &config),
        Commands::BestMove(args) => best_move::execute(args),
    }
}

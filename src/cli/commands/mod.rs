//! Subcommand implementations

pub mod best_move;
pub mod diagnose;
pub mod play;
pub mod symptoms;

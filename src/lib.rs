//! Two small classic AI techniques behind one CLI
//!
//! This crate provides:
//! - A forward-chaining rule engine over string facts, with goal extraction
//!   by category and a CSV rule loader ([`rules`])
//! - Exhaustive minimax for Tic-Tac-Toe with depth tie-breaking
//!   ([`tictactoe`])
//! - Ports and adapters shared by the CLI ([`ports`], [`adapters`])

pub mod adapters;
pub mod cli;
pub mod error;
pub mod ports;
pub mod rules;
pub mod tictactoe;

pub use error::{Error, Result};

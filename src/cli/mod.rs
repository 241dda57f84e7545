//! CLI infrastructure for the tutor binary
//!
//! Each subcommand lives in [`commands`] with an `execute` entry point for
//! the real terminal and a `run` function over any reader/writer for tests.

pub mod commands;
pub mod config;
pub mod output;
pub mod prompt;

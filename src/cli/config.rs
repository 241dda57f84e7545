//! Shared configuration for CLI commands
//!
//! Values come from an optional JSON file given with `--config`; flags on a
//! command override them.

use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::{Error, Result, tictactoe::Player};

/// Who sits on the other side of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PlayMode {
    /// Two people share the terminal
    Human,
    /// One person against the minimax search
    Ai,
}

/// Configuration shared across commands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// CSV rule file; the built-in medical rules are used when absent
    pub rules_path: Option<PathBuf>,

    /// Game mode for `play`
    pub mode: PlayMode,

    /// Mark played by the search in AI mode
    pub ai_player: Player,

    /// Mark that moves first
    pub first_player: Player,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            rules_path: None,
            mode: PlayMode::Ai,
            ai_player: Player::X,
            first_player: Player::X,
        }
    }
}

impl AppConfig {
    /// Read a JSON config file. Missing keys take their default values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be opened and
    /// [`Error::Serialization`] if it is not valid JSON for this type.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| Error::Io {
            operation: format!("open config file {}", path.display()),
            source,
        })?;
        let config = serde_json::from_reader(BufReader::new(file))?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Load `path` if given, otherwise use defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

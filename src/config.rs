//! Arcade configuration.
//!
//! Settings are read from a camelCase JSON file. Every field is optional; a
//! missing file means all defaults.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use tracing::{debug, info};

use crate::games::hangman::HangmanSettings;
use crate::games::memory::MemorySettings;
use crate::games::sudoku::SudokuSettings;

/// Config file picked up from the working directory when no path is given
pub const CONFIG_FILE_NAME: &str = "lab-arcade.json";

const fn default_tick_ms() -> u64 {
    33
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArcadeConfig {
    /// Fixed seed for reproducible deals; random when absent
    #[serde(default)]
    pub seed: Option<u64>,

    /// Render and timer interval in milliseconds
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,

    #[serde(default)]
    pub sudoku: SudokuSettings,

    #[serde(default)]
    pub memory: MemorySettings,

    #[serde(default)]
    pub hangman: HangmanSettings,
}

impl Default for ArcadeConfig {
    fn default() -> Self {
        Self {
            seed: None,
            tick_ms: default_tick_ms(),
            sudoku: SudokuSettings::default(),
            memory: MemorySettings::default(),
            hangman: HangmanSettings::default(),
        }
    }
}

impl ArcadeConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("invalid arcade config")
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = Self::from_json(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load `path` if given, else `lab-arcade.json` when it exists, else defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => {
                let default_path = Path::new(CONFIG_FILE_NAME);
                if default_path.exists() {
                    Self::load_from_file(default_path)
                } else {
                    debug!("no config file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Random source for one play session
    pub fn session_rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        }
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }
}

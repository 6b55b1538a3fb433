//! Game configuration
//!
//! Settings shared by every command, resolved from CLI flags.

use crate::core::Dictionary;
use crate::engine::DEFAULT_WINDOW_SIZE;
use crate::wordlists::{embedded_dictionary, loader::load_from_file};
use anyhow::{Result, bail};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

/// Where the dictionary comes from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WordlistSource {
    #[default]
    Embedded,
    File(PathBuf),
}

impl WordlistSource {
    /// "embedded" (or empty) selects the built-in list; anything else is a path
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "" | "embedded" | "default" => Self::Embedded,
            path => Self::File(PathBuf::from(path)),
        }
    }

    /// Load the dictionary this source names
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or holds no valid word.
    pub fn load(&self) -> Result<Dictionary> {
        match self {
            Self::Embedded => Ok(embedded_dictionary()?),
            Self::File(path) => load_from_file(path),
        }
    }
}

/// Settings for starting games
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub wordlist: WordlistSource,
    /// Opening candidate window for adversarial games
    pub window_size: usize,
    /// Fixed RNG seed; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            wordlist: WordlistSource::Embedded,
            window_size: DEFAULT_WINDOW_SIZE,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Check settings that would otherwise fail mid-game
    ///
    /// # Errors
    /// Returns an error if the window size is 0.
    pub fn validate(&self) -> Result<()> {
        if self.window_size == 0 {
            bail!("--window must be at least 1");
        }
        Ok(())
    }

    /// RNG for this run, reproducible when a seed is set
    #[must_use]
    pub fn rng(&self) -> StdRng {
        self.seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }
}

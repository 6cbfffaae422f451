//! Configuration loading and typed config structures for the session runner.
//!
//! The runner reads `tamagotchi.yaml` from the working directory (or the
//! path given as the first command-line argument). Every section is
//! optional; missing values fall back to the defaults below.
//!
//! ```yaml
//! pet:
//!   name: Mochi
//!   species: cat
//! session:
//!   seed: 42
//!   tick_interval_ms: 500
//!   max_ticks: 1000
//! caretaker:
//!   mode: scripted
//!   script: [feed, play, "change_species:robot", wait, quit]
//! animations_path: assets/animations.yaml
//! ```
//!
//! `TAMAGOTCHI_SEED` and `TAMAGOTCHI_TICK_INTERVAL_MS` override the session
//! values from the environment.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tamagotchi_pet::AnimationTable;

use crate::caretaker::{
    AttentiveCaretaker, CareCommand, Caretaker, NeglectfulCaretaker, ScriptedCaretaker,
};

/// Errors that can occur when loading configuration or assets.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read a file from disk.
    #[error("failed to read {path}: {source}")]
    Io {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        #[from]
        source: serde_yml::Error,
    },

    /// An environment override held a value of the wrong type.
    #[error("invalid value {value:?} for {name}")]
    InvalidOverride {
        /// The environment variable name.
        name: &'static str,
        /// The value that failed to parse.
        value: String,
    },
}

/// Top-level runner configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TamagotchiConfig {
    /// The pet to create.
    #[serde(default)]
    pub pet: PetConfig,

    /// Session pacing and bounds.
    #[serde(default)]
    pub session: SessionConfig,

    /// Who looks after the pet.
    #[serde(default)]
    pub caretaker: CaretakerConfig,

    /// Optional YAML file of animation frames per species.
    #[serde(default)]
    pub animations_path: Option<PathBuf>,
}

impl TamagotchiConfig {
    /// Load configuration from a YAML file, then apply environment overrides.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = read(path)?;
        let mut config = Self::parse(&contents)?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Parse configuration from a YAML string. No overrides are applied.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yml::from_str(yaml)?)
    }

    /// Apply `TAMAGOTCHI_*` overrides from the process environment.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|name| std::env::var(name).ok())
    }

    /// Apply overrides from an arbitrary lookup (the environment in
    /// production, a map in tests).
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("TAMAGOTCHI_SEED") {
            self.session.seed = Some(parse_override("TAMAGOTCHI_SEED", value)?);
        }
        if let Some(value) = lookup("TAMAGOTCHI_TICK_INTERVAL_MS") {
            self.session.tick_interval_ms = parse_override("TAMAGOTCHI_TICK_INTERVAL_MS", value)?;
        }
        Ok(())
    }

    /// Load the animation table named by `animations_path`, if any.
    pub fn load_animations(&self) -> Result<Option<AnimationTable>, ConfigError> {
        let Some(path) = &self.animations_path else {
            return Ok(None);
        };
        let contents = read(path)?;
        Ok(Some(serde_yml::from_str(&contents)?))
    }
}

/// The pet to create at session start.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PetConfig {
    /// The pet's name (default: `Mochi`).
    #[serde(default = "default_pet_name")]
    pub name: String,

    /// Species tag; unknown tags fall back to cat (default: `cat`).
    #[serde(default = "default_species")]
    pub species: String,
}

impl Default for PetConfig {
    fn default() -> Self {
        Self {
            name: default_pet_name(),
            species: default_species(),
        }
    }
}

/// Session pacing and bounds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SessionConfig {
    /// Seed for random events. `None` seeds from the operating system.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Real-time delay between ticks in milliseconds (default: 500).
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,

    /// Stop after this many ticks; 0 means no limit (default: 1000).
    #[serde(default = "default_max_ticks")]
    pub max_ticks: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            tick_interval_ms: default_tick_interval_ms(),
            max_ticks: default_max_ticks(),
        }
    }
}

/// Which caretaker policy drives the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaretakerMode {
    /// Tends to the most urgent need.
    #[default]
    Attentive,
    /// Never does anything.
    Neglectful,
    /// Replays `caretaker.script`.
    Scripted,
}

/// Caretaker settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CaretakerConfig {
    /// The policy to use.
    #[serde(default)]
    pub mode: CaretakerMode,

    /// Commands for [`CaretakerMode::Scripted`].
    #[serde(default)]
    pub script: Vec<CareCommand>,
}

impl CaretakerConfig {
    /// Build the configured caretaker.
    pub fn build(&self) -> Box<dyn Caretaker> {
        match self.mode {
            CaretakerMode::Attentive => Box::new(AttentiveCaretaker),
            CaretakerMode::Neglectful => Box::new(NeglectfulCaretaker),
            CaretakerMode::Scripted => Box::new(ScriptedCaretaker::new(self.script.iter().copied())),
        }
    }
}

fn read(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_override<T: std::str::FromStr>(name: &'static str, value: String) -> Result<T, ConfigError> {
    let parsed = value.trim().parse().ok();
    parsed.ok_or(ConfigError::InvalidOverride { name, value })
}

// ---------------------------------------------------------------------------
// Default value functions (serde default requires named functions)
// ---------------------------------------------------------------------------

fn default_pet_name() -> String {
    "Mochi".to_owned()
}

fn default_species() -> String {
    "cat".to_owned()
}

const fn default_tick_interval_ms() -> u64 {
    500
}

const fn default_max_ticks() -> u64 {
    1000
}

//! Headless session runner for the Tamagotchi simulation.
//!
//! Owns one pet for the length of a session: a caretaker policy picks a
//! command each step, the pet advances one tick, and every frame is
//! reported through structured logs. Rendering is left to other hosts; this
//! binary only drives the state machine and shows what it produces.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from `tamagotchi.yaml` (or the first argument)
//! 3. Create the pet and the random event source
//! 4. Load the optional animation table
//! 5. Run the session loop
//! 6. Log the result and print the final snapshot as JSON

mod caretaker;
mod config;
mod error;
mod observer;
mod session;

use std::path::PathBuf;

use tamagotchi_pet::{EventSource, PetState, RandomEvents};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::TamagotchiConfig;
use crate::error::RunnerError;
use crate::observer::LogObserver;
use crate::session::{SessionBounds, log_session_end, run_session};

/// Default config file, relative to the working directory.
const DEFAULT_CONFIG_PATH: &str = "tamagotchi.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration or assets cannot be loaded, or the
/// final snapshot cannot be serialized.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("tamagotchi-runner starting");

    // 2. Load configuration.
    let config = load_config()?;
    info!(
        pet = %config.pet.name,
        species = %config.pet.species,
        seed = ?config.session.seed,
        tick_interval_ms = config.session.tick_interval_ms,
        max_ticks = config.session.max_ticks,
        caretaker = ?config.caretaker.mode,
        "Configuration loaded"
    );

    // 3. Create the pet and its event source.
    let mut pet = PetState::from_species_tag(config.pet.name.as_str(), &config.pet.species);
    let (mut events, chatter) = event_sources(config.session.seed);
    info!(pet = pet.name(), species = %pet.species(), "Pet created");

    // 4. Load animations.
    let animations = config.load_animations().map_err(RunnerError::from)?;
    if let Some(table) = &animations {
        info!(species = ?table.species().collect::<Vec<_>>(), "Animation table loaded");
    }

    // 5. Run the session.
    let mut caretaker = config.caretaker.build();
    let mut observer = LogObserver::new(animations, chatter);
    let result = run_session(
        &mut pet,
        caretaker.as_mut(),
        events.as_mut(),
        SessionBounds::from(&config.session),
        &mut observer,
    )
    .await;

    // 6. Report.
    log_session_end(&result);
    let json = serde_json::to_string_pretty(&result).map_err(RunnerError::from)?;
    println!("{json}");

    Ok(())
}

/// Load the runner configuration.
///
/// Uses the path given as the first argument, else `tamagotchi.yaml` in the
/// working directory. A missing default file means defaults.
fn load_config() -> Result<TamagotchiConfig, RunnerError> {
    if let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) {
        return Ok(TamagotchiConfig::from_file(&path)?);
    }
    let default_path = PathBuf::from(DEFAULT_CONFIG_PATH);
    if default_path.exists() {
        Ok(TamagotchiConfig::from_file(&default_path)?)
    } else {
        info!("Config file not found, using defaults");
        let mut config = TamagotchiConfig::default();
        config.apply_env_overrides()?;
        Ok(config)
    }
}

/// The tick event source and the speech chatter source.
///
/// With a seed both are deterministic; the chatter source uses the next
/// seed so the two streams stay independent.
fn event_sources(seed: Option<u64>) -> (Box<dyn EventSource>, Box<dyn EventSource>) {
    match seed {
        Some(seed) => (
            Box::new(RandomEvents::seeded(seed)),
            Box::new(RandomEvents::seeded(seed.wrapping_add(1))),
        ),
        None => (
            Box::new(RandomEvents::from_os_rng()),
            Box::new(RandomEvents::from_os_rng()),
        ),
    }
}

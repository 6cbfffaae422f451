//! Random event injection.
//!
//! Each tick has an [`EVENT_CHANCE`] probability of injecting one
//! [`RandomEvent`], drawn uniformly from [`RandomEvent::ALL`]. Randomness
//! comes from an injected [`EventSource`] so that ticks are reproducible:
//! production code uses an OS-seeded [`RandomEvents`], tests use a seeded
//! one or [`NoEvents`].

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tamagotchi_types::RandomEvent;

use crate::vitals::VitalDelta;

/// Probability that a tick injects a random event.
pub const EVENT_CHANCE: f64 = 0.05;

/// A uniform random source.
pub trait EventSource {
    /// Next uniform draw in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Uniform index in `0..len`. Callers never pass `len == 0`.
    fn choose_index(&mut self, len: usize) -> usize;
}

/// Pick one candidate uniformly. Returns `None` for an empty slice.
pub fn choose_one<'a, T, S>(source: &mut S, candidates: &'a [T]) -> Option<&'a T>
where
    S: EventSource + ?Sized,
{
    if candidates.is_empty() {
        return None;
    }
    candidates.get(source.choose_index(candidates.len()))
}

/// Roll for this tick's random event.
///
/// Consumes one draw from `source`, plus one choice if the draw lands
/// under [`EVENT_CHANCE`].
pub fn roll_event<S>(source: &mut S) -> Option<RandomEvent>
where
    S: EventSource + ?Sized,
{
    if source.next_unit() < EVENT_CHANCE {
        choose_one(source, &RandomEvent::ALL).copied()
    } else {
        None
    }
}

/// The vital delta a random event applies.
pub const fn event_effect(event: RandomEvent) -> VitalDelta {
    match event {
        RandomEvent::HungerSpike => VitalDelta {
            hunger: 10,
            ..VitalDelta::ZERO
        },
        RandomEvent::MoodDrop => VitalDelta {
            happiness: -10,
            ..VitalDelta::ZERO
        },
        RandomEvent::HealthDrop => VitalDelta {
            health: -5,
            ..VitalDelta::ZERO
        },
        RandomEvent::EnergyDrain => VitalDelta {
            energy: -15,
            ..VitalDelta::ZERO
        },
    }
}

/// [`EventSource`] backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomEvents<R = SmallRng> {
    rng: R,
}

impl<R: Rng> RandomEvents<R> {
    /// Wrap an existing generator.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomEvents<SmallRng> {
    /// A deterministic source for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    /// A source seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self::new(SmallRng::from_os_rng())
    }
}

impl<R: Rng> EventSource for RandomEvents<R> {
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    fn choose_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.random_range(0..len)
    }
}

/// A source whose rolls never trigger an event.
///
/// Choices always pick the first candidate.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEvents;

impl EventSource for NoEvents {
    fn next_unit(&mut self) -> f64 {
        0.999_999
    }

    fn choose_index(&mut self, _len: usize) -> usize {
        0
    }
}

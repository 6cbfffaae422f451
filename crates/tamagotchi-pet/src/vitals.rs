//! The four clamped vitals and the per-tick decay applied to them.
//!
//! Every mutation goes through [`Vitals::apply`], which shifts each value
//! by a signed delta with saturating arithmetic and clamps the result to
//! `0..=MAX_VITAL`. There is no way to observe a vital outside that range.
//!
//! # Decay order
//!
//! 1. Hunger rises by [`HUNGER_PER_TICK`]
//! 2. Happiness falls by [`HAPPINESS_DECAY`]
//! 3. Health falls by [`STARVATION_DAMAGE`] if hunger (already raised in
//!    step 1) exceeds [`STARVATION_THRESHOLD`]
//! 4. Energy falls by [`ENERGY_DECAY`]

use serde::Serialize;

/// Upper bound of every vital.
pub const MAX_VITAL: u32 = 100;

/// Hunger added each tick.
pub const HUNGER_PER_TICK: i32 = 2;

/// Happiness lost each tick.
pub const HAPPINESS_DECAY: i32 = 1;

/// Energy lost each tick.
pub const ENERGY_DECAY: i32 = 1;

/// Hunger above which the pet starts losing health each tick.
pub const STARVATION_THRESHOLD: u32 = 80;

/// Health lost per tick while starving.
pub const STARVATION_DAMAGE: i32 = 2;

const fn clamp_vital(value: u32) -> u32 {
    if value > MAX_VITAL { MAX_VITAL } else { value }
}

const fn shift(value: u32, delta: i32) -> u32 {
    clamp_vital(value.saturating_add_signed(delta))
}

/// A signed adjustment to each vital, applied simultaneously.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct VitalDelta {
    /// Change to hunger (positive is worse).
    pub hunger: i32,
    /// Change to happiness.
    pub happiness: i32,
    /// Change to health.
    pub health: i32,
    /// Change to energy.
    pub energy: i32,
}

impl VitalDelta {
    /// No change at all.
    pub const ZERO: Self = Self {
        hunger: 0,
        happiness: 0,
        health: 0,
        energy: 0,
    };
}

/// Hunger, happiness, health, and energy, each in `0..=100`.
///
/// Higher hunger is worse; higher happiness, health, and energy are better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Vitals {
    hunger: u32,
    happiness: u32,
    health: u32,
    energy: u32,
}

impl Vitals {
    /// Vitals of a freshly created pet.
    pub const STARTING: Self = Self {
        hunger: 50,
        happiness: 50,
        health: 50,
        energy: 100,
    };

    /// Build vitals from raw values, clamping each to `0..=100`.
    pub const fn new(hunger: u32, happiness: u32, health: u32, energy: u32) -> Self {
        Self {
            hunger: clamp_vital(hunger),
            happiness: clamp_vital(happiness),
            health: clamp_vital(health),
            energy: clamp_vital(energy),
        }
    }

    /// Current hunger.
    pub const fn hunger(&self) -> u32 {
        self.hunger
    }

    /// Current happiness.
    pub const fn happiness(&self) -> u32 {
        self.happiness
    }

    /// Current health.
    pub const fn health(&self) -> u32 {
        self.health
    }

    /// Current energy.
    pub const fn energy(&self) -> u32 {
        self.energy
    }

    /// Apply a delta to all four vitals at once.
    ///
    /// Each vital is shifted independently and clamped, so a delta pushing
    /// past a boundary is simply absorbed.
    pub const fn apply(&mut self, delta: VitalDelta) {
        self.hunger = shift(self.hunger, delta.hunger);
        self.happiness = shift(self.happiness, delta.happiness);
        self.health = shift(self.health, delta.health);
        self.energy = shift(self.energy, delta.energy);
    }

    /// Apply one tick of passive decay. See the module docs for the order.
    pub const fn decay(&mut self) {
        self.hunger = shift(self.hunger, HUNGER_PER_TICK);
        self.happiness = shift(self.happiness, HAPPINESS_DECAY.saturating_neg());
        if self.hunger > STARVATION_THRESHOLD {
            self.health = shift(self.health, STARVATION_DAMAGE.saturating_neg());
        }
        self.energy = shift(self.energy, ENERGY_DECAY.saturating_neg());
    }
}

impl Default for Vitals {
    fn default() -> Self {
        Self::STARTING
    }
}

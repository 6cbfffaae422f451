//! The pet state machine.
//!
//! [`PetState`] owns every mutable attribute of one pet. Callers mutate it
//! through the action methods and [`PetState::advance`], then read the
//! derived values to render a frame. Once [`PetState::is_alive`] returns
//! `false` the pet is terminal and callers should stop mutating it.

use serde::Serialize;
use tamagotchi_types::{Activity, AnimationCategory, LifeStage, PetAction, RandomEvent, Species, Status};
use tracing::debug;

use crate::actions;
use crate::death::{DeathCause, check_death};
use crate::events::{EventSource, event_effect, roll_event};
use crate::status::{derive_animation, derive_status};
use crate::vitals::Vitals;

/// Ticks that make up one day of age.
pub const TICKS_PER_DAY: u64 = 10;

/// What happened during one call to [`PetState::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    /// The tick count after this tick.
    pub tick: u64,
    /// The random event injected this tick, if any.
    pub event: Option<RandomEvent>,
    /// Whether the pet grew one day older.
    pub aged: bool,
    /// The new stage, if the pet evolved this tick.
    pub evolved: Option<LifeStage>,
    /// If the pet is dead after this tick, the cause.
    pub death: Option<DeathCause>,
}

/// A single virtual pet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetState {
    name: String,
    species: Species,
    vitals: Vitals,
    age: u32,
    stage: LifeStage,
    last_activity: Option<Activity>,
    tick_count: u64,
}

impl PetState {
    /// Create a newborn pet.
    pub fn new(name: impl Into<String>, species: Species) -> Self {
        Self {
            name: name.into(),
            species,
            vitals: Vitals::STARTING,
            age: 0,
            stage: LifeStage::Baby,
            last_activity: None,
            tick_count: 0,
        }
    }

    /// Create a newborn pet from a species tag.
    ///
    /// Unknown tags fall back to [`Species::Cat`].
    pub fn from_species_tag(name: impl Into<String>, species_tag: &str) -> Self {
        Self::new(name, Species::from_tag(species_tag))
    }

    /// Restore a pet at a given age with the given vitals.
    ///
    /// The tick count is set to the first tick of that day and the stage is
    /// derived from `age`. The pet has no last activity.
    pub fn from_parts(name: impl Into<String>, species: Species, vitals: Vitals, age: u32) -> Self {
        Self {
            name: name.into(),
            species,
            vitals,
            age,
            stage: LifeStage::for_age(age),
            last_activity: None,
            tick_count: u64::from(age).saturating_mul(TICKS_PER_DAY),
        }
    }

    /// The pet's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The pet's species.
    pub const fn species(&self) -> Species {
        self.species
    }

    /// All four vitals.
    pub const fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    /// Current hunger.
    pub const fn hunger(&self) -> u32 {
        self.vitals.hunger()
    }

    /// Current happiness.
    pub const fn happiness(&self) -> u32 {
        self.vitals.happiness()
    }

    /// Current health.
    pub const fn health(&self) -> u32 {
        self.vitals.health()
    }

    /// Current energy.
    pub const fn energy(&self) -> u32 {
        self.vitals.energy()
    }

    /// Age in days.
    pub const fn age(&self) -> u32 {
        self.age
    }

    /// Current life stage.
    pub const fn stage(&self) -> LifeStage {
        self.stage
    }

    /// What the pet is doing after its last action, if anything.
    pub const fn last_activity(&self) -> Option<Activity> {
        self.last_activity
    }

    /// Ticks elapsed since creation.
    pub const fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Feed the pet.
    pub fn feed(&mut self) {
        self.apply(PetAction::Feed);
    }

    /// Play with the pet.
    pub fn play(&mut self) {
        self.apply(PetAction::Play);
    }

    /// Heal the pet.
    pub fn heal(&mut self) {
        self.apply(PetAction::Heal);
    }

    /// Put the pet to sleep.
    pub fn sleep(&mut self) {
        self.apply(PetAction::Sleep);
    }

    /// Apply an action's fixed effect and record the resulting activity.
    pub fn apply(&mut self, action: PetAction) {
        self.vitals.apply(actions::effect(action));
        self.last_activity = Some(action.activity());
    }

    /// Swap the species tag. Nothing else changes.
    pub const fn change_species(&mut self, species: Species) {
        self.species = species;
    }

    /// Advance the pet by one tick.
    ///
    /// # Order of operations
    ///
    /// 1. Passive decay of the vitals (see [`Vitals::decay`])
    /// 2. Increment the tick count
    /// 3. Age by one day on every [`TICKS_PER_DAY`]th tick
    /// 4. Recompute the stage from the age
    /// 5. Roll for a random event and apply it
    pub fn advance<S>(&mut self, events: &mut S) -> TickReport
    where
        S: EventSource + ?Sized,
    {
        self.vitals.decay();

        self.tick_count = self.tick_count.saturating_add(1);

        let aged = self.tick_count.checked_rem(TICKS_PER_DAY) == Some(0);
        if aged {
            self.age = self.age.saturating_add(1);
        }

        let previous = self.stage;
        self.stage = LifeStage::for_age(self.age);
        let evolved = (self.stage != previous).then_some(self.stage);
        if let Some(stage) = evolved {
            debug!(pet = %self.name, age = self.age, stage = %stage, "Pet evolved");
        }

        let event = roll_event(events);
        if let Some(event) = event {
            self.vitals.apply(event_effect(event));
            debug!(pet = %self.name, tick = self.tick_count, event = %event, "Random event");
        }

        TickReport {
            tick: self.tick_count,
            event,
            aged,
            evolved,
            death: self.death_cause(),
        }
    }

    /// Whether the pet is still alive: health above 0 and hunger below 100.
    pub const fn is_alive(&self) -> bool {
        self.death_cause().is_none()
    }

    /// Why the pet died, or `None` while it is alive.
    pub const fn death_cause(&self) -> Option<DeathCause> {
        check_death(&self.vitals)
    }

    /// The status label.
    pub const fn status(&self) -> Status {
        derive_status(&self.vitals)
    }

    /// The animation category to render.
    pub fn animation_category(&self) -> AnimationCategory {
        derive_animation(&self.vitals, self.last_activity)
    }

    /// A serializable copy of every output.
    pub fn snapshot(&self) -> PetSnapshot {
        PetSnapshot {
            name: self.name.clone(),
            species: self.species,
            hunger: self.hunger(),
            happiness: self.happiness(),
            health: self.health(),
            energy: self.energy(),
            age: self.age,
            stage: self.stage,
            last_activity: self.last_activity,
            tick_count: self.tick_count,
            status: self.status(),
            animation: self.animation_category(),
            alive: self.is_alive(),
            death_cause: self.death_cause(),
        }
    }
}

/// Read-only view of a pet for renderers and logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PetSnapshot {
    /// The pet's name.
    pub name: String,
    /// The pet's species.
    pub species: Species,
    /// Hunger in `0..=100`.
    pub hunger: u32,
    /// Happiness in `0..=100`.
    pub happiness: u32,
    /// Health in `0..=100`.
    pub health: u32,
    /// Energy in `0..=100`.
    pub energy: u32,
    /// Age in days.
    pub age: u32,
    /// Life stage.
    pub stage: LifeStage,
    /// Activity left by the last action.
    pub last_activity: Option<Activity>,
    /// Ticks elapsed since creation.
    pub tick_count: u64,
    /// Status label.
    pub status: Status,
    /// Animation category.
    pub animation: AnimationCategory,
    /// Whether the pet is alive.
    pub alive: bool,
    /// Cause of death, if dead.
    pub death_cause: Option<DeathCause>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::events::NoEvents;

    /// Fires every roll and always picks the given index.
    struct Forced(usize);

    impl EventSource for Forced {
        fn next_unit(&mut self) -> f64 {
            0.0
        }

        fn choose_index(&mut self, _len: usize) -> usize {
            self.0
        }
    }

    fn pet() -> PetState {
        PetState::new("Mochi", Species::Cat)
    }

    #[test]
    fn newborn_defaults() {
        let p = pet();
        assert_eq!(p.name(), "Mochi");
        assert_eq!(p.hunger(), 50);
        assert_eq!(p.happiness(), 50);
        assert_eq!(p.health(), 50);
        assert_eq!(p.energy(), 100);
        assert_eq!(p.age(), 0);
        assert_eq!(p.stage(), LifeStage::Baby);
        assert_eq!(p.last_activity(), None);
        assert_eq!(p.tick_count(), 0);
        assert!(p.is_alive());
    }

    #[test]
    fn unknown_species_tag_falls_back_to_cat() {
        let p = PetState::from_species_tag("Rex", "dinosaur");
        assert_eq!(p.species(), Species::Cat);
        let p = PetState::from_species_tag("Bolt", "robot");
        assert_eq!(p.species(), Species::Robot);
    }

    #[test]
    fn feed_from_baseline() {
        let mut p = pet();
        p.feed();
        assert_eq!(p.hunger(), 35);
        assert_eq!(p.happiness(), 55);
        assert_eq!(p.energy(), 95);
        assert_eq!(p.health(), 50);
        assert_eq!(p.last_activity(), Some(Activity::Eating));
    }

    #[test]
    fn play_from_baseline() {
        let mut p = pet();
        p.play();
        assert_eq!(p.hunger(), 60);
        assert_eq!(p.happiness(), 65);
        assert_eq!(p.energy(), 80);
        assert_eq!(p.last_activity(), Some(Activity::Playing));
    }

    #[test]
    fn heal_from_baseline() {
        let mut p = pet();
        p.heal();
        assert_eq!(p.health(), 65);
        assert_eq!(p.happiness(), 45);
        assert_eq!(p.energy(), 90);
        assert_eq!(p.last_activity(), Some(Activity::Healing));
    }

    #[test]
    fn sleep_clamps_energy() {
        let mut p = pet();
        p.sleep();
        assert_eq!(p.energy(), 100);
        assert_eq!(p.health(), 55);
        assert_eq!(p.happiness(), 45);
        assert_eq!(p.last_activity(), Some(Activity::Sleeping));
    }

    #[test]
    fn actions_never_age_the_pet() {
        let mut p = pet();
        for action in PetAction::ALL.iter().cycle().take(40) {
            p.apply(*action);
        }
        assert_eq!(p.age(), 0);
        assert_eq!(p.tick_count(), 0);
    }

    #[test]
    fn change_species_keeps_everything_else() {
        let mut p = pet();
        p.play();
        let before = p.clone();
        p.change_species(Species::Bunny);
        assert_eq!(p.species(), Species::Bunny);
        assert_eq!(p.vitals(), before.vitals());
        assert_eq!(p.last_activity(), before.last_activity());
        assert_eq!(p.age(), before.age());
    }

    #[test]
    fn advance_applies_decay_and_counts_ticks() {
        let mut p = pet();
        let report = p.advance(&mut NoEvents);
        assert_eq!(report.tick, 1);
        assert_eq!(report.event, None);
        assert!(!report.aged);
        assert_eq!(report.death, None);
        assert_eq!(p.hunger(), 52);
        assert_eq!(p.happiness(), 49);
        assert_eq!(p.energy(), 99);
    }

    #[test]
    fn ten_ticks_make_a_day() {
        let mut p = pet();
        for _ in 0..9 {
            assert!(!p.advance(&mut NoEvents).aged);
        }
        let report = p.advance(&mut NoEvents);
        assert!(report.aged);
        assert_eq!(p.age(), 1);
        assert_eq!(p.tick_count(), 10);
    }

    #[test]
    fn advance_keeps_last_activity() {
        let mut p = pet();
        p.feed();
        p.advance(&mut NoEvents);
        assert_eq!(p.last_activity(), Some(Activity::Eating));
    }

    #[test]
    fn forced_event_is_applied_and_reported() {
        let mut p = pet();
        // Index 3 is EnergyDrain.
        let report = p.advance(&mut Forced(3));
        assert_eq!(report.event, Some(RandomEvent::EnergyDrain));
        assert_eq!(p.energy(), 84);

        let mut p = pet();
        let report = p.advance(&mut Forced(0));
        assert_eq!(report.event, Some(RandomEvent::HungerSpike));
        assert_eq!(p.hunger(), 62);
    }

    #[test]
    fn evolution_reported_once() {
        let mut p = PetState::from_parts("Mochi", Species::Cat, Vitals::STARTING, 14);
        let mut evolutions = Vec::new();
        for _ in 0..10 {
            let report = p.advance(&mut NoEvents);
            if let Some(stage) = report.evolved {
                evolutions.push((report.tick, stage));
            }
        }
        assert_eq!(evolutions, vec![(150, LifeStage::Teen)]);
        assert_eq!(p.age(), 15);
    }

    #[test]
    fn from_parts_derives_stage_and_ticks() {
        let p = PetState::from_parts("Old", Species::Robot, Vitals::STARTING, 31);
        assert_eq!(p.stage(), LifeStage::Adult);
        assert_eq!(p.tick_count(), 310);
        assert_eq!(p.last_activity(), None);
    }

    #[test]
    fn death_report_on_fatal_tick() {
        let mut p = PetState::from_parts("Mochi", Species::Cat, Vitals::new(98, 50, 50, 50), 0);
        let report = p.advance(&mut NoEvents);
        assert_eq!(p.hunger(), 100);
        assert_eq!(report.death, Some(DeathCause::TooHungry));
        assert!(!p.is_alive());
    }

    #[test]
    fn derivations_are_idempotent() {
        let mut p = pet();
        p.play();
        p.play();
        assert_eq!(p.status(), p.status());
        assert_eq!(p.animation_category(), p.animation_category());
        assert_eq!(p.is_alive(), p.is_alive());
    }

    #[test]
    fn snapshot_mirrors_state() {
        let mut p = PetState::from_parts("Mochi", Species::Bunny, Vitals::new(90, 50, 20, 50), 3);
        p.sleep();
        let snap = p.snapshot();
        assert_eq!(snap.name, "Mochi");
        assert_eq!(snap.species, Species::Bunny);
        assert_eq!(snap.health, 25);
        assert_eq!(snap.status, Status::Sick);
        assert_eq!(snap.animation, AnimationCategory::Sick);
        assert!(snap.alive);
        assert_eq!(snap.death_cause, None);

        let json = serde_json::to_value(&snap).unwrap();
        assert_eq!(json["species"], "bunny");
        assert_eq!(json["last_activity"], "sleeping");
        assert_eq!(json["stage"], "Baby");
    }
}

//! Session loop.
//!
//! [`run_session`] drives one pet from its current state until it dies, the
//! caretaker quits, or the tick limit is reached. Each step:
//!
//! 1. Stop if the pet is dead
//! 2. Ask the caretaker for a command; `Quit` ends the session
//! 3. Apply the command
//! 4. Stop if the command killed the pet
//! 5. Advance the pet one tick and notify the observer
//! 6. Stop on death or on the tick limit
//! 7. Sleep for the tick interval
//!
//! The pet is advanced after every command, including `Wait` and species
//! changes, so time keeps passing whatever the caretaker does.

use serde::Serialize;
use tamagotchi_pet::{DeathCause, EventSource, PetSnapshot, PetState, TickReport};
use tracing::info;

use crate::caretaker::{CareCommand, Caretaker};
use crate::config::SessionConfig;

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionEndReason {
    /// The pet died.
    Died(DeathCause),
    /// The caretaker quit.
    Quit,
    /// The configured tick limit was reached.
    MaxTicksReached,
}

/// Limits and pacing for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionBounds {
    /// Stop after this many ticks; 0 means no limit.
    pub max_ticks: u64,
    /// Real-time delay between ticks.
    pub tick_interval_ms: u64,
}

impl SessionBounds {
    /// Whether `ticks` has reached the limit.
    pub const fn tick_limit_reached(self, ticks: u64) -> bool {
        self.max_ticks > 0 && ticks >= self.max_ticks
    }
}

impl From<&SessionConfig> for SessionBounds {
    fn from(config: &SessionConfig) -> Self {
        Self {
            max_ticks: config.max_ticks,
            tick_interval_ms: config.tick_interval_ms,
        }
    }
}

/// Result of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionResult {
    /// Why the session ended.
    pub end_reason: SessionEndReason,
    /// Ticks executed during this session.
    pub total_ticks: u64,
    /// The pet as it was when the session ended.
    pub final_snapshot: PetSnapshot,
}

/// Callback invoked after each tick.
pub trait TickObserver {
    /// Called after the pet has advanced.
    fn on_tick(&mut self, command: CareCommand, report: &TickReport, pet: &PetState);
}

/// A no-op observer for testing.
pub struct NoOpObserver;

impl TickObserver for NoOpObserver {
    fn on_tick(&mut self, _command: CareCommand, _report: &TickReport, _pet: &PetState) {}
}

/// Run a session until the pet dies, the caretaker quits, or the tick limit
/// is reached.
pub async fn run_session(
    pet: &mut PetState,
    caretaker: &mut dyn Caretaker,
    events: &mut dyn EventSource,
    bounds: SessionBounds,
    observer: &mut dyn TickObserver,
) -> SessionResult {
    let mut total_ticks: u64 = 0;

    info!(
        pet = pet.name(),
        species = %pet.species(),
        max_ticks = bounds.max_ticks,
        tick_interval_ms = bounds.tick_interval_ms,
        "Session starting"
    );

    loop {
        if let Some(cause) = pet.death_cause() {
            return finish(pet, SessionEndReason::Died(cause), total_ticks);
        }

        let command = caretaker.decide(pet);
        match command {
            CareCommand::Quit => {
                info!(tick = pet.tick_count(), "Caretaker quit");
                return finish(pet, SessionEndReason::Quit, total_ticks);
            }
            CareCommand::Act(action) => pet.apply(action),
            CareCommand::ChangeSpecies(species) => {
                info!(from = %pet.species(), to = %species, "Species changed");
                pet.change_species(species);
            }
            CareCommand::Wait => {}
        }

        if let Some(cause) = pet.death_cause() {
            info!(command = %command, cause = %cause, "Pet died from the caretaker's action");
            return finish(pet, SessionEndReason::Died(cause), total_ticks);
        }

        let report = pet.advance(events);
        total_ticks = total_ticks.saturating_add(1);
        observer.on_tick(command, &report, pet);

        if let Some(cause) = report.death {
            return finish(pet, SessionEndReason::Died(cause), total_ticks);
        }

        if bounds.tick_limit_reached(total_ticks) {
            info!(tick = report.tick, max_ticks = bounds.max_ticks, "Tick limit reached");
            return finish(pet, SessionEndReason::MaxTicksReached, total_ticks);
        }

        if bounds.tick_interval_ms > 0 {
            tokio::time::sleep(tokio::time::Duration::from_millis(bounds.tick_interval_ms)).await;
        }
    }
}

fn finish(pet: &PetState, end_reason: SessionEndReason, total_ticks: u64) -> SessionResult {
    SessionResult {
        end_reason,
        total_ticks,
        final_snapshot: pet.snapshot(),
    }
}

/// Log the end of a session.
pub fn log_session_end(result: &SessionResult) {
    let snapshot = &result.final_snapshot;
    match result.end_reason {
        SessionEndReason::Died(cause) => info!(
            age = snapshot.age,
            stage = %snapshot.stage,
            total_ticks = result.total_ticks,
            "{}",
            cause.epitaph(&snapshot.name)
        ),
        reason => info!(
            reason = ?reason,
            age = snapshot.age,
            stage = %snapshot.stage,
            total_ticks = result.total_ticks,
            "Session ended"
        ),
    }
}

#[cfg(test)]
mod tests {
    use tamagotchi_pet::{NoEvents, RandomEvents, Vitals};
    use tamagotchi_types::{PetAction, Species};

    use super::*;
    use crate::caretaker::{AttentiveCaretaker, NeglectfulCaretaker, ScriptedCaretaker};

    const UNBOUNDED: SessionBounds = SessionBounds {
        max_ticks: 0,
        tick_interval_ms: 0,
    };

    #[tokio::test]
    async fn neglected_pet_starves() {
        let mut pet = PetState::new("Mochi", Species::Cat);
        let result = run_session(
            &mut pet,
            &mut NeglectfulCaretaker,
            &mut NoEvents,
            UNBOUNDED,
            &mut NoOpObserver,
        )
        .await;
        assert_eq!(
            result.end_reason,
            SessionEndReason::Died(DeathCause::TooHungry)
        );
        assert_eq!(result.total_ticks, 25);
        assert!(!result.final_snapshot.alive);
    }

    #[tokio::test]
    async fn quit_ends_before_ticking() {
        let mut pet = PetState::new("Mochi", Species::Cat);
        let mut caretaker = ScriptedCaretaker::new([
            CareCommand::Act(PetAction::Feed),
            CareCommand::Quit,
        ]);
        let result = run_session(
            &mut pet,
            &mut caretaker,
            &mut NoEvents,
            UNBOUNDED,
            &mut NoOpObserver,
        )
        .await;
        assert_eq!(result.end_reason, SessionEndReason::Quit);
        assert_eq!(result.total_ticks, 1);
        // Fed (35) then one tick (+2).
        assert_eq!(result.final_snapshot.hunger, 37);
    }

    #[tokio::test]
    async fn bounded_by_max_ticks() {
        let mut pet = PetState::new("Mochi", Species::Cat);
        let bounds = SessionBounds {
            max_ticks: 5,
            tick_interval_ms: 0,
        };
        let result = run_session(
            &mut pet,
            &mut AttentiveCaretaker,
            &mut NoEvents,
            bounds,
            &mut NoOpObserver,
        )
        .await;
        assert_eq!(result.end_reason, SessionEndReason::MaxTicksReached);
        assert_eq!(result.total_ticks, 5);
        assert_eq!(pet.tick_count(), 5);
    }

    #[tokio::test]
    async fn dead_pet_ends_immediately() {
        let mut pet = PetState::from_parts("Ghost", Species::Cat, Vitals::new(50, 50, 0, 50), 3);
        let result = run_session(
            &mut pet,
            &mut AttentiveCaretaker,
            &mut NoEvents,
            UNBOUNDED,
            &mut NoOpObserver,
        )
        .await;
        assert_eq!(result.end_reason, SessionEndReason::Died(DeathCause::TooSick));
        assert_eq!(result.total_ticks, 0);
    }

    #[tokio::test]
    async fn fatal_action_ends_without_ticking() {
        let mut pet = PetState::from_parts("Greedy", Species::Cat, Vitals::new(95, 50, 50, 50), 0);
        let mut caretaker = ScriptedCaretaker::new([CareCommand::Act(PetAction::Play)]);
        let result = run_session(
            &mut pet,
            &mut caretaker,
            &mut NoEvents,
            UNBOUNDED,
            &mut NoOpObserver,
        )
        .await;
        assert_eq!(
            result.end_reason,
            SessionEndReason::Died(DeathCause::TooHungry)
        );
        assert_eq!(result.total_ticks, 0);
        assert_eq!(pet.tick_count(), 0);
    }

    #[tokio::test]
    async fn species_change_keeps_vitals_and_still_ticks() {
        let mut pet = PetState::new("Mochi", Species::Cat);
        let mut caretaker = ScriptedCaretaker::new([
            CareCommand::ChangeSpecies(Species::Robot),
            CareCommand::Quit,
        ]);
        let result = run_session(
            &mut pet,
            &mut caretaker,
            &mut NoEvents,
            UNBOUNDED,
            &mut NoOpObserver,
        )
        .await;
        assert_eq!(result.final_snapshot.species, Species::Robot);
        assert_eq!(result.total_ticks, 1);
        assert_eq!(result.final_snapshot.hunger, 52);
    }

    #[tokio::test]
    async fn observer_sees_every_tick() {
        struct Recorder(Vec<(CareCommand, u64)>);

        impl TickObserver for Recorder {
            fn on_tick(&mut self, command: CareCommand, report: &TickReport, _pet: &PetState) {
                self.0.push((command, report.tick));
            }
        }

        let mut pet = PetState::new("Mochi", Species::Cat);
        let mut caretaker = ScriptedCaretaker::new([
            CareCommand::Act(PetAction::Play),
            CareCommand::Wait,
        ]);
        let mut recorder = Recorder(Vec::new());
        let bounds = SessionBounds {
            max_ticks: 3,
            tick_interval_ms: 0,
        };
        run_session(&mut pet, &mut caretaker, &mut NoEvents, bounds, &mut recorder).await;
        assert_eq!(
            recorder.0,
            vec![
                (CareCommand::Act(PetAction::Play), 1),
                (CareCommand::Wait, 2),
                (CareCommand::Wait, 3),
            ]
        );
    }

    #[tokio::test]
    async fn attentive_caretaker_keeps_pet_alive() {
        let mut pet = PetState::new("Mochi", Species::Bunny);
        let mut events = RandomEvents::seeded(42);
        let bounds = SessionBounds {
            max_ticks: 300,
            tick_interval_ms: 0,
        };
        let result = run_session(
            &mut pet,
            &mut AttentiveCaretaker,
            &mut events,
            bounds,
            &mut NoOpObserver,
        )
        .await;
        assert_eq!(result.end_reason, SessionEndReason::MaxTicksReached);
        assert!(result.final_snapshot.alive);
        assert_eq!(result.final_snapshot.age, 30);
    }

    #[tokio::test(start_paused = true)]
    async fn interval_is_respected() {
        let mut pet = PetState::new("Mochi", Species::Cat);
        let bounds = SessionBounds {
            max_ticks: 4,
            tick_interval_ms: 1000,
        };
        let start = tokio::time::Instant::now();
        run_session(
            &mut pet,
            &mut NeglectfulCaretaker,
            &mut NoEvents,
            bounds,
            &mut NoOpObserver,
        )
        .await;
        // Three sleeps between four ticks.
        assert_eq!(start.elapsed().as_secs(), 3);
    }
}

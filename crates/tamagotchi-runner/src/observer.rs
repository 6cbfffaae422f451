//! Tick observer that reports each frame through structured logs.
//!
//! This is the runner's stand-in for a renderer: it resolves the current
//! animation frame from the optional table, picks the pet's speech line,
//! and emits everything as `tracing` fields.

use tamagotchi_pet::{
    AnimationTable, EventSource, FrameCursor, PetState, TickReport, flavor_message,
};
use tracing::{info, warn};

use crate::caretaker::CareCommand;
use crate::session::TickObserver;

/// Logs one line per tick, plus one per random event and evolution.
pub struct LogObserver {
    animations: Option<AnimationTable>,
    cursor: FrameCursor,
    chatter: Box<dyn EventSource>,
}

impl LogObserver {
    /// Create an observer. `chatter` drives idle speech lines and is kept
    /// apart from the tick's event source so speech never shifts events.
    pub fn new(animations: Option<AnimationTable>, chatter: Box<dyn EventSource>) -> Self {
        Self {
            animations,
            cursor: FrameCursor::new(),
            chatter,
        }
    }
}

impl TickObserver for LogObserver {
    fn on_tick(&mut self, command: CareCommand, report: &TickReport, pet: &PetState) {
        self.cursor.step();

        if let Some(event) = report.event {
            warn!(tick = report.tick, event = %event, vital = event.vital(), "Random event");
        }
        if let Some(stage) = report.evolved {
            info!(tick = report.tick, age = pet.age(), stage = %stage, "{} evolved", pet.name());
        }

        let frame = self
            .animations
            .as_ref()
            .and_then(|table| self.cursor.current(table, pet));
        let says = flavor_message(pet, self.chatter.as_mut());

        info!(
            tick = report.tick,
            command = %command,
            age = pet.age(),
            stage = %pet.stage(),
            hunger = pet.hunger(),
            happiness = pet.happiness(),
            health = pet.health(),
            energy = pet.energy(),
            status = %pet.status(),
            animation = %pet.animation_category(),
            frame = frame.unwrap_or(""),
            says = %says,
            "{} the {}",
            pet.name(),
            pet.species().display_name()
        );
    }
}

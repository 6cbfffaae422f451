//! Caretaker trait and built-in policies.
//!
//! Each step of a session the runner asks a [`Caretaker`] what to do with
//! the pet. The caretaker plays the part of the player: it could be a
//! scripted sequence, a simple heuristic, or a human behind a prompt.

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use tamagotchi_pet::PetState;
use tamagotchi_types::{PetAction, Species};

/// One command from the caretaker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum CareCommand {
    /// Perform an action on the pet.
    Act(PetAction),
    /// Switch the pet to another species.
    ChangeSpecies(Species),
    /// Do nothing this step.
    Wait,
    /// End the session.
    Quit,
}

/// A care command string that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown care command: {0:?}")]
pub struct UnknownCommand(pub String);

impl FromStr for CareCommand {
    type Err = UnknownCommand;

    /// Parse `feed`, `play`, `heal`, `sleep`, `wait`, `quit`, or
    /// `change_species:<tag>`. Unknown species tags fall back to cat.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let command = s.trim().to_ascii_lowercase();
        if let Some(tag) = command.strip_prefix("change_species:") {
            return Ok(Self::ChangeSpecies(Species::from_tag(tag)));
        }
        match command.as_str() {
            "wait" => Ok(Self::Wait),
            "quit" => Ok(Self::Quit),
            other => PetAction::ALL
                .into_iter()
                .find(|action| action.tag() == other)
                .map(Self::Act)
                .ok_or_else(|| UnknownCommand(s.to_owned())),
        }
    }
}

impl TryFrom<String> for CareCommand {
    type Error = UnknownCommand;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for CareCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Act(action) => write!(f, "{action}"),
            Self::ChangeSpecies(species) => write!(f, "change_species:{species}"),
            Self::Wait => write!(f, "wait"),
            Self::Quit => write!(f, "quit"),
        }
    }
}

/// Something that decides what to do with the pet each step.
pub trait Caretaker {
    /// Choose the next command given the pet's current state.
    fn decide(&mut self, pet: &PetState) -> CareCommand;
}

/// Looks after the pet's most urgent need, or waits if nothing is urgent.
///
/// Priority: heal when health < 40, feed when hunger > 60, sleep when
/// energy < 30, play when happiness < 40.
#[derive(Debug, Clone, Copy, Default)]
pub struct AttentiveCaretaker;

impl Caretaker for AttentiveCaretaker {
    fn decide(&mut self, pet: &PetState) -> CareCommand {
        if pet.health() < 40 {
            CareCommand::Act(PetAction::Heal)
        } else if pet.hunger() > 60 {
            CareCommand::Act(PetAction::Feed)
        } else if pet.energy() < 30 {
            CareCommand::Act(PetAction::Sleep)
        } else if pet.happiness() < 40 {
            CareCommand::Act(PetAction::Play)
        } else {
            CareCommand::Wait
        }
    }
}

/// Never does anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeglectfulCaretaker;

impl Caretaker for NeglectfulCaretaker {
    fn decide(&mut self, _pet: &PetState) -> CareCommand {
        CareCommand::Wait
    }
}

/// Replays a fixed list of commands, then waits forever.
#[derive(Debug, Clone, Default)]
pub struct ScriptedCaretaker {
    script: VecDeque<CareCommand>,
}

impl ScriptedCaretaker {
    /// Create a caretaker that replays `script` in order.
    pub fn new(script: impl IntoIterator<Item = CareCommand>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }
}

impl Caretaker for ScriptedCaretaker {
    fn decide(&mut self, _pet: &PetState) -> CareCommand {
        self.script.pop_front().unwrap_or(CareCommand::Wait)
    }
}

#[cfg(test)]
mod tests {
    use tamagotchi_pet::Vitals;

    use super::*;

    fn pet_with(vitals: Vitals) -> PetState {
        PetState::from_parts("Mochi", Species::Cat, vitals, 0)
    }

    #[test]
    fn parse_commands() {
        assert_eq!("feed".parse(), Ok(CareCommand::Act(PetAction::Feed)));
        assert_eq!(" Sleep ".parse(), Ok(CareCommand::Act(PetAction::Sleep)));
        assert_eq!("wait".parse(), Ok(CareCommand::Wait));
        assert_eq!("quit".parse(), Ok(CareCommand::Quit));
        assert_eq!(
            "change_species:bunny".parse(),
            Ok(CareCommand::ChangeSpecies(Species::Bunny))
        );
    }

    #[test]
    fn change_species_falls_back_to_cat() {
        assert_eq!(
            "change_species:hamster".parse(),
            Ok(CareCommand::ChangeSpecies(Species::Cat))
        );
    }

    #[test]
    fn unknown_command_is_rejected() {
        assert_eq!(
            "dance".parse::<CareCommand>(),
            Err(UnknownCommand("dance".to_owned()))
        );
    }

    #[test]
    fn display_round_trips_through_parse() {
        let command = CareCommand::ChangeSpecies(Species::Robot);
        assert_eq!(command.to_string().parse(), Ok(command));
    }

    #[test]
    fn attentive_priorities() {
        let mut caretaker = AttentiveCaretaker;
        assert_eq!(
            caretaker.decide(&pet_with(Vitals::new(90, 10, 20, 10))),
            CareCommand::Act(PetAction::Heal)
        );
        assert_eq!(
            caretaker.decide(&pet_with(Vitals::new(90, 10, 50, 10))),
            CareCommand::Act(PetAction::Feed)
        );
        assert_eq!(
            caretaker.decide(&pet_with(Vitals::new(50, 10, 50, 10))),
            CareCommand::Act(PetAction::Sleep)
        );
        assert_eq!(
            caretaker.decide(&pet_with(Vitals::new(50, 10, 50, 50))),
            CareCommand::Act(PetAction::Play)
        );
        assert_eq!(
            caretaker.decide(&pet_with(Vitals::STARTING)),
            CareCommand::Wait
        );
    }

    #[test]
    fn neglectful_always_waits() {
        let mut caretaker = NeglectfulCaretaker;
        assert_eq!(
            caretaker.decide(&pet_with(Vitals::new(99, 0, 1, 0))),
            CareCommand::Wait
        );
    }

    #[test]
    fn script_replays_then_waits() {
        let pet = pet_with(Vitals::STARTING);
        let mut caretaker = ScriptedCaretaker::new([
            CareCommand::Act(PetAction::Play),
            CareCommand::Quit,
        ]);
        assert_eq!(caretaker.decide(&pet), CareCommand::Act(PetAction::Play));
        assert_eq!(caretaker.decide(&pet), CareCommand::Quit);
        assert_eq!(caretaker.decide(&pet), CareCommand::Wait);
    }
}

//! Fixed effects of the caretaker actions.
//!
//! Each action shifts the vitals by a constant delta. Actions have no
//! preconditions and cannot fail; clamping absorbs any overshoot.

use tamagotchi_types::PetAction;

use crate::vitals::VitalDelta;

/// Effect of [`PetAction::Feed`].
pub const FEED: VitalDelta = VitalDelta {
    hunger: -15,
    happiness: 5,
    health: 0,
    energy: -5,
};

/// Effect of [`PetAction::Play`].
pub const PLAY: VitalDelta = VitalDelta {
    hunger: 10,
    happiness: 15,
    health: 0,
    energy: -20,
};

/// Effect of [`PetAction::Heal`].
pub const HEAL: VitalDelta = VitalDelta {
    hunger: 0,
    happiness: -5,
    health: 15,
    energy: -10,
};

/// Effect of [`PetAction::Sleep`].
pub const SLEEP: VitalDelta = VitalDelta {
    hunger: 0,
    happiness: -5,
    health: 5,
    energy: 40,
};

/// The vital delta an action applies.
pub const fn effect(action: PetAction) -> VitalDelta {
    match action {
        PetAction::Feed => FEED,
        PetAction::Play => PLAY,
        PetAction::Heal => HEAL,
        PetAction::Sleep => SLEEP,
    }
}

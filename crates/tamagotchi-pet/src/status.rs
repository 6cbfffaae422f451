//! Derivation of the display state from the vitals.
//!
//! Both classifications are priority-ordered and the first matching rule
//! wins. They never mutate anything.

use tamagotchi_types::{Activity, AnimationCategory, Status};

use crate::vitals::Vitals;

/// Health below this is reported as sick.
pub const SICK_BELOW: u32 = 30;

/// Hunger above this is reported as hungry.
pub const HUNGRY_ABOVE: u32 = 70;

/// Happiness below this is reported as sad.
pub const SAD_BELOW: u32 = 30;

/// Energy below this is reported as tired.
pub const TIRED_BELOW: u32 = 30;

/// Happiness above this is reported as joyful and animates as happy.
pub const JOYFUL_ABOVE: u32 = 80;

/// Classify the vitals into a status label.
///
/// Order: sick, hungry, sad, tired, joyful, normal.
pub const fn derive_status(vitals: &Vitals) -> Status {
    if vitals.health() < SICK_BELOW {
        Status::Sick
    } else if vitals.hunger() > HUNGRY_ABOVE {
        Status::Hungry
    } else if vitals.happiness() < SAD_BELOW {
        Status::Sad
    } else if vitals.energy() < TIRED_BELOW {
        Status::Tired
    } else if vitals.happiness() > JOYFUL_ABOVE {
        Status::Joyful
    } else {
        Status::Normal
    }
}

/// Pick the animation category for the vitals and last activity.
///
/// Order: sick, sleeping, happy, the last activity, idle.
pub fn derive_animation(vitals: &Vitals, last_activity: Option<Activity>) -> AnimationCategory {
    if vitals.health() < SICK_BELOW {
        return AnimationCategory::Sick;
    }
    if last_activity == Some(Activity::Sleeping) {
        return AnimationCategory::Sleeping;
    }
    if vitals.happiness() > JOYFUL_ABOVE {
        return AnimationCategory::Happy;
    }
    last_activity.map_or(AnimationCategory::Idle, AnimationCategory::from)
}
